//! Per-group statistics produced by the series aggregator.

use serde::{Deserialize, Serialize};

use super::usage_record::UNKNOWN_LABEL;

/// Group a record falls into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupLabel {
    /// Regular key value
    Key(String),
    /// Category code outside its domain, e.g. day-of-week 9
    OutOfDomain(i64),
    /// Record has no value for the grouping key
    Missing,
}

impl GroupLabel {
    /// Label shown on the chart axis.
    pub fn as_str(&self) -> &str {
        match self {
            GroupLabel::Key(key) => key,
            GroupLabel::OutOfDomain(_) | GroupLabel::Missing => UNKNOWN_LABEL,
        }
    }
}

/// Statistics of one numeric field within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricStat {
    /// Field name
    pub metric: String,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Statistics of every requested field for one group key value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedStat {
    /// Group label (region, "Mon", "2024-03", ...)
    pub group_key: String,
    /// Number of contributing records, always >= 1
    pub sample_count: usize,
    /// One entry per requested field, in request order
    pub metrics: Vec<MetricStat>,
}

impl GroupedStat {
    /// Look up the statistics of one field.
    pub fn metric(&self, name: &str) -> Option<&MetricStat> {
        self.metrics.iter().find(|m| m.metric == name)
    }
}

/// Output of an aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Groups in first-seen order of their key
    pub groups: Vec<GroupedStat>,
    /// Distinct out-of-domain codes encountered, in first-seen order
    pub unknown_day_codes: Vec<i64>,
}

impl Aggregation {
    /// True when no group was produced.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up a group by label.
    pub fn group(&self, key: &str) -> Option<&GroupedStat> {
        self.groups.iter().find(|g| g.group_key == key)
    }
}
