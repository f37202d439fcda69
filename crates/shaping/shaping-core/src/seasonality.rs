//! Seasonality series and summary

use chrono::Datelike;
use shaping_spi::{SeasonalPoint, SeasonalityRow, SeasonalitySummary};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Relabel monthly rows with short month names.
pub fn seasonal_points(rows: &[SeasonalityRow]) -> Vec<SeasonalPoint> {
    rows.iter()
        .map(|row| SeasonalPoint {
            month: MONTHS[row.month.month0() as usize].to_string(),
            cpu_usage: row.cpu_usage,
        })
        .collect()
}

/// Peak and lowest month; ties go to the earliest month. `None` when empty.
pub fn seasonality_summary(points: &[SeasonalPoint]) -> Option<SeasonalitySummary> {
    let first = points.first()?;
    let mut peak = first;
    let mut lowest = first;
    for point in &points[1..] {
        if point.cpu_usage > peak.cpu_usage {
            peak = point;
        }
        if point.cpu_usage < lowest.cpu_usage {
            lowest = point;
        }
    }

    let text = format!(
        "CPU usage peaked in {} ({:.2} units) and was lowest in {} ({:.2} units), indicating seasonal variation in demand.",
        peak.month, peak.cpu_usage, lowest.month, lowest.cpu_usage
    );
    Some(SeasonalitySummary {
        peak: peak.clone(),
        lowest: lowest.clone(),
        text,
    })
}
