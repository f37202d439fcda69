//! Date-aligned multi-series points.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::calendar::parse_calendar_day;
use super::usage_record::{UsageRecord, UNKNOWN_LABEL};
use crate::contract::{KeySelector, MetricSelector};

/// One (date, category, value) observation fed to the time-axis aligner.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// `None` when the source date was unparseable
    pub date: Option<NaiveDate>,
    /// Series name, e.g. a region
    pub category: String,
    /// `None` when the source value was not numeric
    pub value: Option<f64>,
}

impl Observation {
    pub fn new(date: Option<NaiveDate>, category: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            date,
            category: category.into(),
            value,
        }
    }

    /// Observation of a normalized record.
    pub fn from_record<K, M>(record: &UsageRecord, key: &K, metric: &M) -> Self
    where
        K: KeySelector + ?Sized,
        M: MetricSelector + ?Sized,
    {
        let value = metric.value(record);
        Self {
            date: record.date,
            category: key.select(record).as_str().to_string(),
            value: value.is_finite().then_some(value),
        }
    }

    /// Observation of a raw JSON row.
    ///
    /// The value stays `None` unless it is a finite number or numeric text,
    /// so the aligner can skip it.
    pub fn from_row(row: &Value, date_key: &str, category_key: &str, value_key: &str) -> Self {
        let date = row
            .get(date_key)
            .and_then(Value::as_str)
            .and_then(|raw| parse_calendar_day(raw).ok());
        let category = match row.get(category_key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => UNKNOWN_LABEL.to_string(),
        };
        let value = match row.get(value_key) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite());

        Self {
            date,
            category,
            value,
        }
    }
}

/// One point on the shared date axis.
///
/// `values` has an entry for every category known at alignment time;
/// `None` marks a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeriesPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: IndexMap<String, Option<f64>>,
}

impl AlignedSeriesPoint {
    /// Value of one series at this date; `None` for a gap or unknown series.
    pub fn value(&self, category: &str) -> Option<f64> {
        self.values.get(category).copied().flatten()
    }
}

/// Output of the time-axis aligner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    /// Distinct categories in first-seen order
    pub categories: Vec<String>,
    /// Points sorted ascending by date, one per distinct date
    pub points: Vec<AlignedSeriesPoint>,
    /// Observations dropped for an unparseable date or non-numeric value
    pub skipped: usize,
}

impl AlignedSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Chart views fed by aligned series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartView {
    /// Multi-region usage overlay
    MultiRegionOverlay,
    /// Single metric line
    SingleSeries,
    /// Actual/predicted forecast chart
    Forecast,
}

impl ChartView {
    /// Whether the renderer should draw lines through gap markers.
    pub fn connect_nulls(self) -> bool {
        matches!(self, ChartView::MultiRegionOverlay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_nulls_policy() {
        assert!(ChartView::MultiRegionOverlay.connect_nulls());
        assert!(!ChartView::SingleSeries.connect_nulls());
        assert!(!ChartView::Forecast.connect_nulls());
    }

    #[test]
    fn test_point_serializes_flat() {
        let mut values = IndexMap::new();
        values.insert("East US".to_string(), Some(1.5));
        values.insert("West US".to_string(), None);
        let point = AlignedSeriesPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            values,
        };

        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["East US"], 1.5);
        assert!(json["West US"].is_null());
        assert!(json.as_object().unwrap().contains_key("West US"));
    }

    #[test]
    fn test_from_row_coercion() {
        let row = serde_json::json!({
            "date": "2024-01-01 00:00:00",
            "region": "East US",
            "usage_cpu": "12.5"
        });
        let obs = Observation::from_row(&row, "date", "region", "usage_cpu");
        assert_eq!(obs.date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(obs.category, "East US");
        assert_eq!(obs.value, Some(12.5));

        let row = serde_json::json!({"date": "soon", "usage_cpu": "high"});
        let obs = Observation::from_row(&row, "date", "region", "usage_cpu");
        assert_eq!(obs.date, None);
        assert_eq!(obs.category, "Unknown");
        assert_eq!(obs.value, None);
    }

    #[test]
    fn test_from_record_uses_selectors() {
        use crate::model::{GroupKey, Metric};

        let record = UsageRecord::new(NaiveDate::from_ymd_opt(2024, 2, 3), "West", "VM", 3.0, 9.0);
        let obs = Observation::from_record(&record, &GroupKey::Region, &Metric::UsageStorage);
        assert_eq!(obs.category, "West");
        assert_eq!(obs.value, Some(9.0));
    }

    #[test]
    fn test_point_value_lookup() {
        let mut values = IndexMap::new();
        values.insert("A".to_string(), None);
        let point = AlignedSeriesPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            values,
        };
        assert_eq!(point.value("A"), None);
        assert_eq!(point.value("B"), None);
    }
}
