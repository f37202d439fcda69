//! Trait for reading a numeric field of a record

use crate::model::UsageRecord;

/// Reads one numeric field of a record.
pub trait MetricSelector: Send + Sync {
    /// Field name, used as the metric label in grouped statistics
    fn name(&self) -> &str;

    /// Field value; normalized records never yield a missing value
    fn value(&self, record: &UsageRecord) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TotalUsage;

    impl MetricSelector for TotalUsage {
        fn name(&self) -> &str {
            "total_usage"
        }

        fn value(&self, record: &UsageRecord) -> f64 {
            record.usage_cpu + record.usage_storage
        }
    }

    #[test]
    fn test_derived_metric() {
        let record = UsageRecord::new(None, "A", "VM", 10.0, 5.0);
        assert_eq!(TotalUsage.value(&record), 15.0);
        assert_eq!(TotalUsage.name(), "total_usage");
    }
}
