//! Normalized usage record.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Label used for a categorical value that is missing or out of domain.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Numeric feature columns every normalized record carries.
///
/// Absent values default to `0.0`.
pub const DECLARED_FEATURES: [&str; 12] = [
    "users_active",
    "cpu_lag_1",
    "cpu_lag_3",
    "cpu_lag_7",
    "cpu_roll_mean_7",
    "cpu_roll_mean_30",
    "cpu_roll_max_7",
    "cpu_roll_min_7",
    "cpu_total",
    "storage_allocated",
    "utilization_ratio",
    "storage_efficiency",
];

/// One usage row after coercion into the closed, typed model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    /// Calendar day, `None` when the source date was missing or unparseable
    pub date: Option<NaiveDate>,
    /// Cloud region
    pub region: String,
    /// Resource type (VM, Storage, Container)
    pub resource_type: String,
    /// CPU usage
    pub usage_cpu: f64,
    /// Storage usage
    pub usage_storage: f64,
    /// Raw day-of-week code, or derived from `date` (Mon=1 .. Sun=7)
    pub day_of_week: Option<i64>,
    /// Lags, rolling means and any other numeric columns
    pub features: BTreeMap<String, f64>,
}

impl UsageRecord {
    /// Create a record with no features.
    pub fn new(
        date: Option<NaiveDate>,
        region: impl Into<String>,
        resource_type: impl Into<String>,
        usage_cpu: f64,
        usage_storage: f64,
    ) -> Self {
        Self {
            date,
            region: region.into(),
            resource_type: resource_type.into(),
            usage_cpu,
            usage_storage,
            day_of_week: None,
            features: BTreeMap::new(),
        }
    }

    /// Set the day-of-week code.
    pub fn with_day_of_week(mut self, code: i64) -> Self {
        self.day_of_week = Some(code);
        self
    }

    /// Set a feature value.
    pub fn with_feature(mut self, name: impl Into<String>, value: f64) -> Self {
        self.features.insert(name.into(), value);
        self
    }

    /// Feature value, `0.0` when the record does not carry it.
    pub fn feature(&self, name: &str) -> f64 {
        self.features.get(name).copied().unwrap_or(0.0)
    }

    /// Month bucket as `YYYY-MM`.
    pub fn month_key(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m").to_string())
    }
}
