//! Validated entry point for the per-view transforms.

use serde_json::Value;
use shaping_core::{capacity, correlation, insights, monitoring, normalize};
use shaping_spi::{
    Aggregation, AlignedSeries, CapacityAdjustment, CapacityView, ComparisonRow, CorrelationMatrix,
    ForecastBands, ForecastPoint, GroupKey, ImpactScore, Metric, ModelComparison,
    MonitoringStatus, MonitoringView, Result, ShapingConfig, UsageRecord,
};
use tracing::debug;

/// Bundles the transforms behind one validated [`ShapingConfig`].
#[derive(Debug, Clone)]
pub struct Shaper {
    config: ShapingConfig,
}

impl Shaper {
    /// Create a shaper, rejecting inconsistent thresholds.
    pub fn new(config: ShapingConfig) -> Result<Self> {
        config.validate()?;
        debug!(?config, "shaper configured");
        Ok(Self { config })
    }

    pub fn config(&self) -> &ShapingConfig {
        &self.config
    }

    /// Normalize raw feature rows.
    pub fn records(&self, rows: &[Value]) -> Vec<UsageRecord> {
        normalize::normalize_rows(rows)
    }

    /// Day-of-week statistics of CPU and storage usage.
    pub fn day_of_week_stats(&self, records: &[UsageRecord]) -> Aggregation {
        shaping_core::aggregate(
            records,
            &GroupKey::DayOfWeek,
            &[Metric::UsageCpu, Metric::UsageStorage],
        )
    }

    /// Per-region statistics of CPU and storage usage.
    pub fn regional_stats(&self, records: &[UsageRecord]) -> Aggregation {
        shaping_core::aggregate(
            records,
            &GroupKey::Region,
            &[Metric::UsageCpu, Metric::UsageStorage],
        )
    }

    /// One line per region for `metric`.
    pub fn region_overlay(&self, records: &[UsageRecord], metric: &Metric) -> AlignedSeries {
        shaping_core::align_records(records, &GroupKey::Region, metric)
    }

    /// Heatmap from a raw correlation object.
    pub fn correlation_matrix(&self, correlations: &Value) -> CorrelationMatrix {
        let input = correlation::correlation_input_from_json(correlations);
        correlation::build_matrix(&input, &self.config)
    }

    /// Impact of every factor on `target`.
    pub fn impact_scores(&self, correlations: &Value, target: &str) -> Vec<ImpactScore> {
        let input = correlation::correlation_input_from_json(correlations);
        correlation::impact_on(&input, target)
    }

    pub fn forecast_bands(&self, points: &[ForecastPoint]) -> ForecastBands {
        shaping_core::compose(points)
    }

    pub fn capacity(
        &self,
        region: &str,
        service: &str,
        adjustment: &CapacityAdjustment,
    ) -> CapacityView {
        capacity::capacity_view(region, service, adjustment, &self.config)
    }

    pub fn monitoring(&self, status: &MonitoringStatus) -> MonitoringView {
        monitoring::monitoring_view(status, &self.config)
    }

    pub fn model_comparison(&self, comparison: &ModelComparison) -> Vec<ComparisonRow> {
        monitoring::comparison_rows(comparison)
    }

    /// Multi-region CPU overlay from the insights time series.
    pub fn time_series_overlay(&self, rows: &[Value]) -> AlignedSeries {
        insights::time_series_overlay(rows)
    }
}

impl Default for Shaper {
    fn default() -> Self {
        Self {
            config: ShapingConfig::default(),
        }
    }
}
