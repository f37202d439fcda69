//! Built-in grouping keys and metrics.

use serde::{Deserialize, Serialize};

use super::day_of_week::DayOfWeek;
use super::grouped_stat::GroupLabel;
use super::usage_record::UsageRecord;
use crate::contract::{KeySelector, MetricSelector};

/// Categorical keys records can be grouped or split by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    Region,
    ResourceType,
    DayOfWeek,
    /// Calendar month, `YYYY-MM`
    Month,
}

impl KeySelector for GroupKey {
    fn name(&self) -> &str {
        match self {
            GroupKey::Region => "region",
            GroupKey::ResourceType => "resource_type",
            GroupKey::DayOfWeek => "day_of_week",
            GroupKey::Month => "month",
        }
    }

    fn select(&self, record: &UsageRecord) -> GroupLabel {
        match self {
            GroupKey::Region => GroupLabel::Key(record.region.clone()),
            GroupKey::ResourceType => GroupLabel::Key(record.resource_type.clone()),
            GroupKey::DayOfWeek => match record.day_of_week {
                Some(code) => match DayOfWeek::from_code(code) {
                    Ok(day) => GroupLabel::Key(day.label().to_string()),
                    Err(_) => GroupLabel::OutOfDomain(code),
                },
                None => GroupLabel::Missing,
            },
            GroupKey::Month => match record.month_key() {
                Some(month) => GroupLabel::Key(month),
                None => GroupLabel::Missing,
            },
        }
    }
}

/// Numeric fields of a usage record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    UsageCpu,
    UsageStorage,
    /// Any feature column, `0.0` when the record lacks it
    Feature(String),
}

impl Metric {
    pub fn feature(name: impl Into<String>) -> Self {
        Metric::Feature(name.into())
    }
}

impl MetricSelector for Metric {
    fn name(&self) -> &str {
        match self {
            Metric::UsageCpu => "usage_cpu",
            Metric::UsageStorage => "usage_storage",
            Metric::Feature(name) => name,
        }
    }

    fn value(&self, record: &UsageRecord) -> f64 {
        match self {
            Metric::UsageCpu => record.usage_cpu,
            Metric::UsageStorage => record.usage_storage,
            Metric::Feature(name) => record.feature(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> UsageRecord {
        UsageRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, 4),
            "East US",
            "VM",
            42.0,
            7.0,
        )
        .with_feature("cpu_lag_1", 40.0)
    }

    #[test]
    fn test_day_of_week_key() {
        let rec = record().with_day_of_week(1);
        assert_eq!(GroupKey::DayOfWeek.select(&rec), GroupLabel::Key("Mon".to_string()));

        let rec = record().with_day_of_week(9);
        assert_eq!(GroupKey::DayOfWeek.select(&rec), GroupLabel::OutOfDomain(9));

        let mut rec = record();
        rec.day_of_week = None;
        assert_eq!(GroupKey::DayOfWeek.select(&rec), GroupLabel::Missing);
    }

    #[test]
    fn test_month_key() {
        assert_eq!(
            GroupKey::Month.select(&record()),
            GroupLabel::Key("2024-03".to_string())
        );
        let mut rec = record();
        rec.date = None;
        assert_eq!(GroupKey::Month.select(&rec), GroupLabel::Missing);
    }

    #[test]
    fn test_metric_values() {
        let rec = record();
        assert_eq!(Metric::UsageCpu.value(&rec), 42.0);
        assert_eq!(Metric::UsageStorage.value(&rec), 7.0);
        assert_eq!(Metric::feature("cpu_lag_1").value(&rec), 40.0);
        assert_eq!(Metric::feature("missing").value(&rec), 0.0);
        assert_eq!(Metric::feature("cpu_lag_1").name(), "cpu_lag_1");
    }
}
