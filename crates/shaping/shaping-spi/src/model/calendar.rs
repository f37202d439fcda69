//! Calendar-day parsing shared by the normalizer and the wire models.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::error::{Result, ShapingError};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse a calendar day from the encodings the analytics backend emits.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS[.fff]` (pandas timestamps),
/// `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339. The time of day is dropped.
pub fn parse_calendar_day(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();

    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(day);
    }
    for format in DATETIME_FORMATS {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(stamp.date());
        }
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(stamp.date_naive());
    }

    Err(ShapingError::InvalidDate(trimmed.to_string()))
}

/// Serde adapter for a required calendar day.
pub fn deserialize_day<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).map_err(serde::de::Error::custom)
}

/// Serde adapter for an optional calendar day; unparseable text becomes `None`.
pub fn deserialize_opt_day<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|text| parse_calendar_day(&text).ok()))
}
