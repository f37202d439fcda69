//! Forecast chart points and the views derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::deserialize_day;

/// One row of a combined actual/predicted forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(deserialize_with = "deserialize_day")]
    pub date: NaiveDate,
    #[serde(default)]
    pub actual: Option<f64>,
    #[serde(default)]
    pub predicted: Option<f64>,
    #[serde(default)]
    pub lower_bound: Option<f64>,
    #[serde(default)]
    pub upper_bound: Option<f64>,
}

impl ForecastPoint {
    /// Historical row.
    pub fn actual(date: NaiveDate, actual: f64) -> Self {
        Self {
            date,
            actual: Some(actual),
            predicted: None,
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// Forecast row without a confidence band.
    pub fn predicted(date: NaiveDate, predicted: f64) -> Self {
        Self {
            date,
            actual: None,
            predicted: Some(predicted),
            lower_bound: None,
            upper_bound: None,
        }
    }

    /// Attach confidence bounds.
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self
    }
}

/// (date, value) point on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Paired bounds of the confidence band at one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPoint {
    pub date: NaiveDate,
    pub lower: f64,
    pub upper: f64,
}

/// Shaded forecast region, from the first row without an actual to the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRegion {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Views composed from one forecast series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastBands {
    pub historical: Vec<SeriesPoint>,
    pub forecast: Vec<SeriesPoint>,
    pub band: Vec<BandPoint>,
    /// `None` for an entirely historical series
    pub region: Option<ForecastRegion>,
}

impl ForecastBands {
    /// Forecast boundary date, if any.
    pub fn boundary(&self) -> Option<NaiveDate> {
        self.region.map(|r| r.start)
    }
}
