//! Rows of the insights payload and the panels derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::{deserialize_day, deserialize_opt_day};

/// Pre-aggregated CPU statistics for one day-of-week code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStatRow {
    pub day_of_week: i64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Day statistics with the code replaced by its chart label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelledDayStat {
    /// "Mon" .. "Sun", or "Unknown"
    pub day: String,
    pub code: i64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Pre-aggregated CPU statistics for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalStatRow {
    pub region: String,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

/// Peak CPU for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakUsageRow {
    pub region: String,
    pub cpu_peak: f64,
}

/// Monthly mean CPU, keyed by the first day of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalityRow {
    #[serde(deserialize_with = "deserialize_day")]
    pub month: NaiveDate,
    pub cpu_usage: f64,
}

/// Seasonality point with a short month label ("Jan").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPoint {
    pub month: String,
    pub cpu_usage: f64,
}

/// Peak and lowest month of a seasonality series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalitySummary {
    pub peak: SeasonalPoint,
    pub lowest: SeasonalPoint,
    pub text: String,
}

/// Before/after usage of one record, as sent for the comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonUsageRow {
    pub region: String,
    pub cpu_before: f64,
    pub cpu_after: f64,
    pub storage_before: f64,
    pub storage_after: f64,
}

/// Region means of the before/after comparison columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionComparison {
    pub region: String,
    pub cpu_before: f64,
    pub cpu_after: f64,
    pub storage_before: f64,
    pub storage_after: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRegionRow {
    pub region: String,
    #[serde(default)]
    pub avg_utilization: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakUsageDayRow {
    /// `None` when the backend sent an unparseable timestamp
    #[serde(default, deserialize_with = "deserialize_opt_day")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub total_cpu: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrendRow {
    /// `YYYY-MM`
    pub month_num: String,
    #[serde(default, alias = "cpu_usage")]
    pub avg_cpu: Option<f64>,
}

/// Rolling-window backtest summary of one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestRow {
    pub model: String,
    #[serde(default)]
    pub windows: Option<u32>,
    #[serde(default)]
    pub avg_mae: Option<f64>,
    #[serde(default)]
    pub avg_rmse: Option<f64>,
    /// Percent text, e.g. "12.30%"
    #[serde(default)]
    pub avg_mape: Option<String>,
    #[serde(default)]
    pub std_mae: Option<f64>,
    #[serde(default)]
    pub std_rmse: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One line of a text panel: a label and its formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLine {
    pub label: String,
    pub value: String,
}

impl PanelLine {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Correlation of one factor against a target column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactScore {
    /// Column name
    pub factor: String,
    /// Column name with underscores replaced by spaces
    pub label: String,
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonality_row_accepts_first_of_month() {
        let row: SeasonalityRow =
            serde_json::from_str(r#"{"month": "2024-02-01", "cpu_usage": 61.5}"#).unwrap();
        assert_eq!(row.month, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_peak_day_parses_pandas_timestamp() {
        let row: PeakUsageDayRow =
            serde_json::from_str(r#"{"date": "2024-01-15 00:00:00", "total_cpu": 980.0}"#)
                .unwrap();
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 1, 15));

        let row: PeakUsageDayRow =
            serde_json::from_str(r#"{"date": "NaT", "total_cpu": null}"#).unwrap();
        assert_eq!(row.date, None);
        assert_eq!(row.total_cpu, None);
    }

    #[test]
    fn test_monthly_trend_alias() {
        let row: MonthlyTrendRow =
            serde_json::from_str(r#"{"month_num": "2024-03", "cpu_usage": 12.0}"#).unwrap();
        assert_eq!(row.avg_cpu, Some(12.0));
    }

    #[test]
    fn test_backtest_row_with_error_only() {
        let row: BacktestRow =
            serde_json::from_str(r#"{"model": "LSTM", "error": "file not found"}"#).unwrap();
        assert_eq!(row.windows, None);
        assert_eq!(row.error.as_deref(), Some("file not found"));
    }
}
