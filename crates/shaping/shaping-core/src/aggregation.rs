//! Series aggregator
//!
//! Groups records by a categorical key and reduces numeric fields to
//! mean/min/max/median per group in a single pass.

use indexmap::IndexMap;
use shaping_spi::{
    day_label, Aggregation, DayStatRow, GroupLabel, GroupedStat, KeySelector, LabelledDayStat,
    MetricSelector, MetricStat, UsageRecord,
};
use tracing::{debug, warn};

/// Running values of one metric within a group.
#[derive(Debug, Clone)]
struct Accumulator {
    sum: f64,
    min: f64,
    max: f64,
    values: Vec<f64>,
}

impl Accumulator {
    fn new(first: f64) -> Self {
        Self {
            sum: first,
            min: first,
            max: first,
            values: vec![first],
        }
    }

    fn push(&mut self, value: f64) {
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.values.push(value);
    }

    fn finish(mut self, metric: &str, count: usize) -> MetricStat {
        MetricStat {
            metric: metric.to_string(),
            mean: self.sum / count as f64,
            min: self.min,
            max: self.max,
            median: median(&mut self.values),
        }
    }
}

/// Median of a non-empty slice; mean of the middle pair for even sizes.
fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

struct Group {
    count: usize,
    metrics: Vec<Accumulator>,
}

/// Group `records` by `key` and compute statistics for every metric.
///
/// Groups come out in first-seen order. Records whose key is out of domain
/// (a day code outside 1-7) or missing land in the `"Unknown"` group, and
/// out-of-domain codes are reported in `unknown_day_codes`.
pub fn aggregate<K, M>(records: &[UsageRecord], key: &K, metrics: &[M]) -> Aggregation
where
    K: KeySelector + ?Sized,
    M: MetricSelector,
{
    let mut groups: IndexMap<String, Group> = IndexMap::new();
    let mut unknown_day_codes: Vec<i64> = Vec::new();

    for record in records {
        let label = key.select(record);
        if let GroupLabel::OutOfDomain(code) = label {
            if !unknown_day_codes.contains(&code) {
                warn!(key = key.name(), code, "out-of-domain category code");
                unknown_day_codes.push(code);
            }
        }

        let values = metrics.iter().map(|m| m.value(record));
        match groups.get_mut(label.as_str()) {
            Some(group) => {
                group.count += 1;
                for (acc, value) in group.metrics.iter_mut().zip(values) {
                    acc.push(value);
                }
            }
            None => {
                groups.insert(
                    label.as_str().to_string(),
                    Group {
                        count: 1,
                        metrics: values.map(Accumulator::new).collect(),
                    },
                );
            }
        }
    }

    let groups: Vec<GroupedStat> = groups
        .into_iter()
        .map(|(group_key, group)| GroupedStat {
            group_key,
            sample_count: group.count,
            metrics: group
                .metrics
                .into_iter()
                .zip(metrics)
                .map(|(acc, metric)| acc.finish(metric.name(), group.count))
                .collect(),
        })
        .collect();

    debug!(
        key = key.name(),
        records = records.len(),
        groups = groups.len(),
        "aggregated records"
    );

    Aggregation {
        groups,
        unknown_day_codes,
    }
}

/// Attach chart labels to pre-aggregated day-of-week statistics.
pub fn label_day_stats(rows: &[DayStatRow]) -> Vec<LabelledDayStat> {
    rows.iter()
        .map(|row| {
            let day = day_label(row.day_of_week);
            if !(1..=7).contains(&row.day_of_week) {
                warn!(code = row.day_of_week, "out-of-domain day-of-week code");
            }
            LabelledDayStat {
                day: day.to_string(),
                code: row.day_of_week,
                min: row.min,
                median: row.median,
                max: row.max,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shaping_spi::{GroupKey, Metric};

    fn rec(region: &str, day: i64, cpu: f64) -> UsageRecord {
        UsageRecord::new(None, region, "VM", cpu, cpu * 2.0).with_day_of_week(day)
    }

    #[test]
    fn test_empty_input() {
        let result = aggregate(&[], &GroupKey::Region, &[Metric::UsageCpu]);
        assert!(result.is_empty());
        assert!(result.unknown_day_codes.is_empty());
    }

    #[test]
    fn test_day_of_week_stats() {
        let records = vec![rec("A", 1, 10.0), rec("A", 1, 20.0)];
        let result = aggregate(&records, &GroupKey::DayOfWeek, &[Metric::UsageCpu]);

        assert_eq!(result.groups.len(), 1);
        let mon = result.group("Mon").unwrap();
        assert_eq!(mon.sample_count, 2);
        let cpu = mon.metric("usage_cpu").unwrap();
        assert_eq!(cpu.mean, 15.0);
        assert_eq!(cpu.min, 10.0);
        assert_eq!(cpu.max, 20.0);
        assert_eq!(cpu.median, 15.0);
    }

    #[test]
    fn test_first_seen_order() {
        let records = vec![rec("West", 2, 1.0), rec("East", 3, 2.0), rec("West", 4, 3.0)];
        let result = aggregate(&records, &GroupKey::Region, &[Metric::UsageCpu]);
        let keys: Vec<&str> = result.groups.iter().map(|g| g.group_key.as_str()).collect();
        assert_eq!(keys, vec!["West", "East"]);
    }

    #[test]
    fn test_mean_is_sum_over_count() {
        let cpus = [3.0, 8.0, 1.5, 9.0, 4.25];
        let records: Vec<UsageRecord> = cpus.iter().map(|&c| rec("A", 5, c)).collect();
        let result = aggregate(&records, &GroupKey::Region, &[Metric::UsageCpu]);
        let stat = result.group("A").unwrap().metric("usage_cpu").unwrap();

        let expected = cpus.iter().sum::<f64>() / cpus.len() as f64;
        assert!((stat.mean - expected).abs() < 1e-12);
        assert_eq!(stat.median, 4.25);
    }

    #[test]
    fn test_multiple_metrics_in_request_order() {
        let records = vec![rec("A", 1, 2.0), rec("A", 1, 4.0)];
        let metrics = [Metric::UsageStorage, Metric::UsageCpu];
        let result = aggregate(&records, &GroupKey::Region, &metrics);
        let group = result.group("A").unwrap();

        assert_eq!(group.metrics[0].metric, "usage_storage");
        assert_eq!(group.metrics[0].mean, 6.0);
        assert_eq!(group.metrics[1].mean, 3.0);
    }

    #[test]
    fn test_out_of_domain_codes_surface() {
        let records = vec![rec("A", 1, 1.0), rec("A", 9, 2.0), rec("A", 0, 3.0), rec("A", 9, 4.0)];
        let result = aggregate(&records, &GroupKey::DayOfWeek, &[Metric::UsageCpu]);

        assert_eq!(result.unknown_day_codes, vec![9, 0]);
        let unknown = result.group("Unknown").unwrap();
        assert_eq!(unknown.sample_count, 3);
        assert!(result.groups.iter().all(|g| g.group_key != "undefined"));
    }

    #[test]
    fn test_month_grouping_skips_nothing() {
        let mut dated = rec("A", 1, 1.0);
        dated.date = NaiveDate::from_ymd_opt(2024, 1, 9);
        let undated = rec("A", 1, 3.0);
        let result = aggregate(&[dated, undated], &GroupKey::Month, &[Metric::UsageCpu]);

        assert_eq!(result.group("2024-01").unwrap().sample_count, 1);
        assert_eq!(result.group("Unknown").unwrap().sample_count, 1);
        assert!(result.unknown_day_codes.is_empty());
    }

    #[test]
    fn test_label_day_stats() {
        let rows = vec![
            DayStatRow { day_of_week: 3, min: 1.0, median: 2.0, max: 3.0 },
            DayStatRow { day_of_week: 8, min: 0.0, median: 0.0, max: 0.0 },
        ];
        let labelled = label_day_stats(&rows);
        assert_eq!(labelled[0].day, "Wed");
        assert_eq!(labelled[1].day, "Unknown");
        assert_eq!(labelled[1].code, 8);
    }
}
