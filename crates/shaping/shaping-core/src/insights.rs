//! Insight panels
//!
//! Text panels and chart series derived from the insights payload.

use indexmap::IndexMap;
use serde_json::Value;
use shaping_spi::{
    AlignedSeries, BacktestRow, ComparisonUsageRow, MonthlyTrendRow, Observation, PanelLine,
    PeakUsageDayRow, RegionComparison, TopRegionRow, UNKNOWN_LABEL,
};

use crate::alignment::align;

const NOT_AVAILABLE: &str = "N/A";

fn fixed2(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Top regions, utilization shown as a percentage.
pub fn top_region_lines(rows: &[TopRegionRow]) -> Vec<PanelLine> {
    rows.iter()
        .map(|row| {
            let value = match row.avg_utilization.filter(|v| v.is_finite()) {
                Some(ratio) => format!("{:.2}%", ratio * 100.0),
                None => NOT_AVAILABLE.to_string(),
            };
            PanelLine::new(row.region.clone(), value)
        })
        .collect()
}

/// Peak usage days as `YYYY-MM-DD` with their total CPU.
pub fn peak_day_lines(rows: &[PeakUsageDayRow]) -> Vec<PanelLine> {
    rows.iter()
        .map(|row| {
            let day = row
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
            PanelLine::new(day, fixed2(row.total_cpu))
        })
        .collect()
}

/// Monthly CPU trend table.
pub fn monthly_trend_lines(rows: &[MonthlyTrendRow]) -> Vec<PanelLine> {
    rows.iter()
        .map(|row| PanelLine::new(row.month_num.clone(), fixed2(row.avg_cpu)))
        .collect()
}

/// One line per backtested model: windows, mean errors and MAPE.
pub fn backtest_lines(rows: &[BacktestRow]) -> Vec<PanelLine> {
    rows.iter()
        .map(|row| {
            let value = match &row.error {
                Some(error) => format!("error: {}", error),
                None => format!(
                    "windows {}, MAE {}, RMSE {}, MAPE {}",
                    row.windows
                        .map(|w| w.to_string())
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                    fixed2(row.avg_mae),
                    fixed2(row.avg_rmse),
                    row.avg_mape.as_deref().unwrap_or(NOT_AVAILABLE),
                ),
            };
            PanelLine::new(row.model.clone(), value)
        })
        .collect()
}

#[derive(Default)]
struct ComparisonSums {
    count: usize,
    cpu_before: f64,
    cpu_after: f64,
    storage_before: f64,
    storage_after: f64,
}

/// Region means of the before/after comparison columns, first-seen order.
pub fn compare_regions(rows: &[ComparisonUsageRow]) -> Vec<RegionComparison> {
    let mut sums: IndexMap<&str, ComparisonSums> = IndexMap::new();
    for row in rows {
        let entry = sums.entry(row.region.as_str()).or_default();
        entry.count += 1;
        entry.cpu_before += row.cpu_before;
        entry.cpu_after += row.cpu_after;
        entry.storage_before += row.storage_before;
        entry.storage_after += row.storage_after;
    }

    sums.into_iter()
        .map(|(region, s)| {
            let n = s.count as f64;
            RegionComparison {
                region: region.to_string(),
                cpu_before: s.cpu_before / n,
                cpu_after: s.cpu_after / n,
                storage_before: s.storage_before / n,
                storage_after: s.storage_after / n,
            }
        })
        .collect()
}

/// Multi-region CPU overlay from raw `{date, region, usage_cpu}` rows.
pub fn time_series_overlay(rows: &[Value]) -> AlignedSeries {
    align(
        rows.iter()
            .map(|row| Observation::from_row(row, "date", "region", "usage_cpu")),
    )
}
