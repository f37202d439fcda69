//! Chart-ready views assembled by the dashboard session.

use serde::{Deserialize, Serialize};
use shaping_spi::{
    Aggregation, AlignedSeries, CapacityView, ComparisonRow, CorrelationMatrix, ForecastBands,
    ForecastPoint, ImpactScore, LabelledDayStat, PanelLine, PeakUsageRow, RegionComparison,
    RegionalStatRow, SeasonalPoint, SeasonalitySummary,
};

/// Usage dashboard for one feature query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageView {
    /// Rows on this page
    pub rows: usize,
    /// Total rows matching the filter, when the backend reports it
    pub total: Option<u64>,
    /// One line per region of the charted metric
    pub overlay: AlignedSeries,
    pub day_of_week: Aggregation,
    pub regional: Aggregation,
}

/// Forecast explorer for one forecast query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastView {
    pub bands: ForecastBands,
    /// Rows with no actual and a predicted value
    pub forecast_rows: Vec<ForecastPoint>,
}

/// Capacity planning page: demand forecast plus recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityPanel {
    pub bands: ForecastBands,
    pub capacity: CapacityView,
}

/// Insights page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsView {
    pub heatmap: CorrelationMatrix,
    pub impact: Vec<ImpactScore>,
    pub day_of_week: Vec<LabelledDayStat>,
    pub regional_stats: Vec<RegionalStatRow>,
    pub peak_usage: Vec<PeakUsageRow>,
    pub seasonality: Vec<SeasonalPoint>,
    pub seasonality_summary: Option<SeasonalitySummary>,
    pub comparison: Vec<RegionComparison>,
    pub overlay: AlignedSeries,
    pub top_regions: Vec<PanelLine>,
    pub peak_days: Vec<PanelLine>,
    pub monthly_trend: Vec<PanelLine>,
    pub backtest: Vec<PanelLine>,
}

/// Model comparison table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelsView {
    pub best_model: Option<String>,
    pub rows: Vec<ComparisonRow>,
}
