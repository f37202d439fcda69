//! Response bodies of the analytics backend.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use shaping_spi::calendar::deserialize_opt_day;
use shaping_spi::{
    BacktestRow, ComparisonUsageRow, DayStatRow, ForecastPoint, MonthlyTrendRow, PeakUsageDayRow,
    PeakUsageRow, RegionalStatRow, SeasonalityRow, TopRegionRow,
};
use tracing::warn;

/// Row list where a malformed row is dropped instead of failing the body.
///
/// Anything other than an array reads as an empty list.
fn lenient_rows<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let rows = match Value::deserialize(deserializer)? {
        Value::Array(rows) => rows,
        _ => return Ok(Vec::new()),
    };
    let total = rows.len();
    let parsed: Vec<T> = rows
        .into_iter()
        .filter_map(|row| serde_json::from_value(row).ok())
        .collect();
    if parsed.len() < total {
        warn!(
            dropped = total - parsed.len(),
            kept = parsed.len(),
            "dropped malformed rows"
        );
    }
    Ok(parsed)
}

/// One page of raw feature rows; rows are normalized client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturePage {
    #[serde(default)]
    pub data: Vec<Value>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionsResponse {
    #[serde(default)]
    pub regions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceTypesResponse {
    #[serde(default)]
    pub resource_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub metrics: Vec<String>,
}

/// Span of dates available in the dataset.
///
/// The backend sends `null` or the text `"None"` for an empty dataset; both
/// read as `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default, deserialize_with = "deserialize_opt_day")]
    pub min_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_opt_day")]
    pub max_date: Option<NaiveDate>,
}

/// Dropdown options of the usage dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub resource_types: Vec<String>,
    pub date_range: DateRange,
}

/// Pre-aggregated series under `chart_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default, deserialize_with = "lenient_rows")]
    pub day_of_week_stats: Vec<DayStatRow>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub regional_stats: Vec<RegionalStatRow>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub peak_usage: Vec<PeakUsageRow>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub seasonality: Vec<SeasonalityRow>,
    /// Raw `{date, region, usage_cpu}` rows
    #[serde(default)]
    pub time_series: Vec<Value>,
}

/// Body of `GET /api/insights`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    #[serde(default, deserialize_with = "lenient_rows")]
    pub comparison: Vec<ComparisonUsageRow>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub top_regions_by_utilization: Vec<TopRegionRow>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub peak_usage_days: Vec<PeakUsageDayRow>,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub monthly_cpu_trend: Vec<MonthlyTrendRow>,
    /// `{feature: {feature: r}}`, possibly sparse
    #[serde(default)]
    pub correlations: Value,
    #[serde(default)]
    pub chart_data: ChartData,
    #[serde(default, deserialize_with = "lenient_rows")]
    pub backtest_summary: Vec<BacktestRow>,
}

/// One forecast row as sent; rows without a parseable date are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(default, deserialize_with = "deserialize_opt_day")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub actual: Option<f64>,
    #[serde(default)]
    pub predicted: Option<f64>,
    #[serde(default)]
    pub lower_bound: Option<f64>,
    #[serde(default)]
    pub upper_bound: Option<f64>,
}

/// Body of `GET /api/forecast`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    #[serde(default, deserialize_with = "lenient_rows")]
    pub forecast: Vec<ForecastRow>,
    #[serde(default)]
    pub metrics: Value,
}

impl ForecastResponse {
    /// Dated rows sorted ascending by date.
    pub fn points(&self) -> Vec<ForecastPoint> {
        let mut points: Vec<ForecastPoint> = self
            .forecast
            .iter()
            .filter_map(|row| {
                row.date.map(|date| ForecastPoint {
                    date,
                    actual: row.actual,
                    predicted: row.predicted,
                    lower_bound: row.lower_bound,
                    upper_bound: row.upper_bound,
                })
            })
            .collect();
        points.sort_by_key(|p| p.date);
        points
    }
}

/// Body of `POST /api/model-comparison/train-all`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainResponse {
    #[serde(default)]
    pub message: String,
}
