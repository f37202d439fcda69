//! Time-axis aligner
//!
//! Merges per-category observations onto one sorted date axis. Every point
//! carries a slot for every known category, `None` marking a gap.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::{IndexMap, IndexSet};
use shaping_spi::{
    AlignedSeries, AlignedSeriesPoint, KeySelector, MetricSelector, Observation, UsageRecord,
};
use tracing::{debug, warn};

/// Align observations on a shared, ascending, de-duplicated date axis.
///
/// Observations with no date or no numeric value are skipped; their
/// category is still known, so it gets a gap on every date. A later
/// observation for the same date and category replaces an earlier one.
pub fn align<I>(observations: I) -> AlignedSeries
where
    I: IntoIterator<Item = Observation>,
{
    let observations: Vec<Observation> = observations.into_iter().collect();

    let categories: IndexSet<String> = observations.iter().map(|o| o.category.clone()).collect();
    let blank: IndexMap<String, Option<f64>> =
        categories.iter().map(|c| (c.clone(), None)).collect();

    let mut by_date: BTreeMap<NaiveDate, IndexMap<String, Option<f64>>> = BTreeMap::new();
    let mut skipped = 0usize;

    for obs in observations {
        let (Some(date), Some(value)) = (obs.date, obs.value.filter(|v| v.is_finite())) else {
            skipped += 1;
            continue;
        };
        let slots = by_date.entry(date).or_insert_with(|| blank.clone());
        slots.insert(obs.category, Some(value));
    }

    if skipped > 0 {
        warn!(skipped, "skipped observations with unparseable date or value");
    }

    let points: Vec<AlignedSeriesPoint> = by_date
        .into_iter()
        .map(|(date, values)| AlignedSeriesPoint { date, values })
        .collect();

    debug!(
        categories = categories.len(),
        points = points.len(),
        "aligned series"
    );

    AlignedSeries {
        categories: categories.into_iter().collect(),
        points,
        skipped,
    }
}

/// Align normalized records, one series per `key` value, plotting `metric`.
pub fn align_records<K, M>(records: &[UsageRecord], key: &K, metric: &M) -> AlignedSeries
where
    K: KeySelector + ?Sized,
    M: MetricSelector + ?Sized,
{
    align(
        records
            .iter()
            .map(|record| Observation::from_record(record, key, metric)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shaping_spi::{GroupKey, Metric};

    fn day(d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 1, d)
    }

    #[test]
    fn test_empty_input() {
        let series = align(Vec::<Observation>::new());
        assert!(series.is_empty());
        assert!(series.categories.is_empty());
        assert_eq!(series.skipped, 0);
    }

    #[test]
    fn test_gaps_are_explicit() {
        let series = align(vec![
            Observation::new(day(2), "A", Some(1.0)),
            Observation::new(day(1), "B", Some(2.0)),
        ]);

        assert_eq!(series.categories, vec!["A", "B"]);
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].date, day(1).unwrap());
        assert_eq!(series.points[0].values.get("A"), Some(&None));
        assert_eq!(series.points[0].value("B"), Some(2.0));
        assert_eq!(series.points[1].values.get("B"), Some(&None));
    }

    #[test]
    fn test_dates_strictly_ascending() {
        let series = align(vec![
            Observation::new(day(5), "A", Some(1.0)),
            Observation::new(day(3), "A", Some(2.0)),
            Observation::new(day(5), "B", Some(3.0)),
            Observation::new(day(1), "B", Some(4.0)),
        ]);
        let dates: Vec<NaiveDate> = series.points.iter().map(|p| p.date).collect();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn test_invalid_observations_skipped() {
        let series = align(vec![
            Observation::new(None, "A", Some(1.0)),
            Observation::new(day(1), "B", None),
            Observation::new(day(1), "C", Some(f64::NAN)),
            Observation::new(day(2), "A", Some(4.0)),
        ]);

        assert_eq!(series.skipped, 3);
        assert_eq!(series.points.len(), 1);
        // categories of skipped observations still get slots
        let point = &series.points[0];
        for category in ["A", "B", "C"] {
            assert!(point.values.contains_key(category), "{category}");
        }
    }

    #[test]
    fn test_later_value_overwrites() {
        let series = align(vec![
            Observation::new(day(1), "A", Some(1.0)),
            Observation::new(day(1), "A", Some(9.0)),
        ]);
        assert_eq!(series.points[0].value("A"), Some(9.0));
    }

    #[test]
    fn test_align_records_by_region() {
        let records = vec![
            UsageRecord::new(day(1), "East", "VM", 10.0, 0.0),
            UsageRecord::new(day(2), "West", "VM", 20.0, 0.0),
            UsageRecord::new(None, "North", "VM", 30.0, 0.0),
        ];
        let series = align_records(&records, &GroupKey::Region, &Metric::UsageCpu);

        assert_eq!(series.categories, vec!["East", "West", "North"]);
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.skipped, 1);
        assert_eq!(series.points[1].value("West"), Some(20.0));
        assert_eq!(series.points[1].value("North"), None);
    }
}
