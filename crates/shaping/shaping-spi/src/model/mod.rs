//! Model module containing data structures

pub mod calendar;
mod aligned_series;
mod capacity;
mod correlation;
mod day_of_week;
mod forecast_point;
mod grouped_stat;
mod insight;
mod monitoring;
mod selector;
mod shaping_config;
mod usage_record;

pub use aligned_series::{AlignedSeries, AlignedSeriesPoint, ChartView, Observation};
pub use calendar::parse_calendar_day;
pub use capacity::{CapacityAdjustment, CapacityView, RiskLevel};
pub use correlation::{
    CellStrength, CorrelationCell, CorrelationInput, CorrelationMatrix, StrongPair,
};
pub use day_of_week::{day_label, DayOfWeek};
pub use forecast_point::{BandPoint, ForecastBands, ForecastPoint, ForecastRegion, SeriesPoint};
pub use grouped_stat::{Aggregation, GroupLabel, GroupedStat, MetricStat};
pub use insight::{
    BacktestRow, ComparisonUsageRow, DayStatRow, ImpactScore, LabelledDayStat, MonthlyTrendRow,
    PanelLine, PeakUsageDayRow, PeakUsageRow, RegionComparison, RegionalStatRow, SeasonalPoint,
    SeasonalityRow, SeasonalitySummary, TopRegionRow,
};
pub use monitoring::{
    ComparisonRow, Measure, ModelComparison, ModelHealth, ModelHealthRow, ModelMetricsRow,
    ModelScore, MonitoringStatus, MonitoringView,
};
pub use selector::{GroupKey, Metric};
pub use shaping_config::ShapingConfig;
pub use usage_record::{UsageRecord, DECLARED_FEATURES, UNKNOWN_LABEL};
