//! Shaping Service Provider Interface
//!
//! Typed view models, selector traits and errors for the data-shaping
//! pipeline that turns analytics API payloads into chart-ready series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{KeySelector, MetricSelector};
pub use error::{Result, ShapingError};
pub use model::{
    calendar, day_label, parse_calendar_day, AlignedSeries, AlignedSeriesPoint, Aggregation,
    BacktestRow, BandPoint, CapacityAdjustment, CapacityView, CellStrength, ChartView,
    ComparisonRow, ComparisonUsageRow, CorrelationCell, CorrelationInput, CorrelationMatrix,
    DayOfWeek, DayStatRow, ForecastBands, ForecastPoint, ForecastRegion, GroupKey, GroupLabel,
    GroupedStat, ImpactScore, LabelledDayStat, Measure, Metric, MetricStat, ModelComparison,
    ModelHealth, ModelHealthRow, ModelMetricsRow, ModelScore, MonitoringStatus, MonitoringView,
    MonthlyTrendRow, Observation, PanelLine, PeakUsageDayRow, PeakUsageRow, RegionComparison,
    RegionalStatRow, RiskLevel, SeasonalPoint, SeasonalityRow, SeasonalitySummary, SeriesPoint,
    ShapingConfig, StrongPair, TopRegionRow, UsageRecord, DECLARED_FEATURES, UNKNOWN_LABEL,
};
