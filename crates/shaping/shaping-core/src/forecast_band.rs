//! Forecast band composer

use shaping_spi::{BandPoint, ForecastBands, ForecastPoint, ForecastRegion, SeriesPoint};
use tracing::debug;

/// Split a forecast series into historical, forecast and band views.
///
/// The shaded region starts at the first point without an actual and ends
/// at the last point. A series with an actual everywhere has no region.
pub fn compose(points: &[ForecastPoint]) -> ForecastBands {
    let historical = points
        .iter()
        .filter_map(|p| p.actual.map(|value| SeriesPoint { date: p.date, value }))
        .collect();
    let forecast = points
        .iter()
        .filter_map(|p| p.predicted.map(|value| SeriesPoint { date: p.date, value }))
        .collect();
    let band: Vec<BandPoint> = points
        .iter()
        .filter_map(|p| match (p.lower_bound, p.upper_bound) {
            (Some(lower), Some(upper)) => Some(BandPoint {
                date: p.date,
                lower,
                upper,
            }),
            _ => None,
        })
        .collect();

    let region = points
        .iter()
        .find(|p| p.actual.is_none())
        .zip(points.last())
        .map(|(first, last)| ForecastRegion {
            start: first.date,
            end: last.date,
        });

    debug!(
        points = points.len(),
        band = band.len(),
        has_region = region.is_some(),
        "composed forecast bands"
    );

    ForecastBands {
        historical,
        forecast,
        band,
        region,
    }
}

/// Rows that are pure forecasts: no actual, a predicted value.
pub fn forecast_only(points: &[ForecastPoint]) -> Vec<ForecastPoint> {
    points
        .iter()
        .filter(|p| p.actual.is_none() && p.predicted.is_some())
        .cloned()
        .collect()
}
