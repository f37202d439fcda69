//! Shaping Consumer API
//!
//! This crate provides:
//! - [`ShapingConfig`] thresholds (re-exported from the SPI)
//! - [`Shaper`], a validated entry point bundling the transforms per view
//! - Re-exports from SPI and core for convenience

mod shaper;

pub use shaper::Shaper;

// Re-export from core
pub use shaping_core::{
    aggregate, aggregation, align, align_records, alignment, assess_risk, backtest_lines,
    build_matrix, capacity, capacity_view, classify, classify_with, coerce_number,
    compare_regions, comparison_rows, compose, correlation, correlation_input_from_json,
    forecast_band, forecast_only, impact_on, insights, label_day_stats, model_health,
    monitoring, monitoring_view, monthly_trend_lines, normalize, normalize_row, normalize_rows,
    parse_percent, peak_day_lines, recommendation, seasonal_points, seasonality,
    seasonality_summary, time_series_overlay, top_region_lines,
};

// Re-export from SPI
pub use shaping_spi::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::Shaper;
    pub use shaping_core::{
        aggregate, align, align_records, build_matrix, compose, forecast_only, normalize_rows,
    };
    pub use shaping_spi::{
        AlignedSeries, ChartView, CorrelationMatrix, ForecastBands, ForecastPoint, GroupKey,
        KeySelector, Metric, MetricSelector, Result, ShapingConfig, ShapingError, UsageRecord,
    };
}
