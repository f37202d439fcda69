//! Shaping Core
//!
//! Pure, synchronous transforms from analytics payloads to chart-ready
//! view models: normalization, aggregation, time-axis alignment,
//! correlation matrices, forecast bands and the dashboard panels.

pub mod aggregation;
pub mod alignment;
pub mod capacity;
pub mod correlation;
pub mod forecast_band;
pub mod insights;
pub mod monitoring;
pub mod normalize;
pub mod seasonality;

// Re-export SPI types for implementations
pub use shaping_spi::{
    Aggregation, AlignedSeries, AlignedSeriesPoint, CellStrength, ChartView, CorrelationCell,
    CorrelationInput, CorrelationMatrix, ForecastBands, ForecastPoint, GroupKey, GroupedStat,
    KeySelector, Metric, MetricSelector, Observation, Result, ShapingConfig, ShapingError,
    UsageRecord,
};

// Re-export main operations
pub use aggregation::{aggregate, label_day_stats};
pub use alignment::{align, align_records};
pub use capacity::{assess_risk, capacity_view, recommendation};
pub use correlation::{build_matrix, classify, classify_with, correlation_input_from_json, impact_on};
pub use forecast_band::{compose, forecast_only};
pub use insights::{
    backtest_lines, compare_regions, monthly_trend_lines, peak_day_lines, time_series_overlay,
    top_region_lines,
};
pub use monitoring::{comparison_rows, model_health, monitoring_view, parse_percent};
pub use normalize::{coerce_number, normalize_row, normalize_rows};
pub use seasonality::{seasonal_points, seasonality_summary};
