//! Day-of-week codes and their chart labels.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::usage_record::UNKNOWN_LABEL;
use crate::error::{Result, ShapingError};

/// Day of the week using the backend's numbering (Mon=1 .. Sun=7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    /// Map a numeric code to a day; codes outside 1..=7 are rejected.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1..=7 => Ok(Self::ALL[(code - 1) as usize]),
            other => Err(ShapingError::UnknownDayCode(other)),
        }
    }

    /// Day of a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::ALL[date.weekday().num_days_from_monday() as usize]
    }

    /// Numeric code (Mon=1 .. Sun=7).
    pub fn code(self) -> i64 {
        self as i64 + 1
    }

    /// Three-letter chart label.
    pub fn label(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "Mon",
            DayOfWeek::Tue => "Tue",
            DayOfWeek::Wed => "Wed",
            DayOfWeek::Thu => "Thu",
            DayOfWeek::Fri => "Fri",
            DayOfWeek::Sat => "Sat",
            DayOfWeek::Sun => "Sun",
        }
    }
}

/// Label for a raw code, `"Unknown"` when out of domain.
pub fn day_label(code: i64) -> &'static str {
    DayOfWeek::from_code(code)
        .map(DayOfWeek::label)
        .unwrap_or(UNKNOWN_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_labels() {
        let labels: Vec<&str> = (1..=7).map(day_label).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    }

    #[test]
    fn test_out_of_domain_codes() {
        assert_eq!(DayOfWeek::from_code(0), Err(ShapingError::UnknownDayCode(0)));
        assert_eq!(DayOfWeek::from_code(8), Err(ShapingError::UnknownDayCode(8)));
        assert_eq!(day_label(-3), "Unknown");
    }

    #[test]
    fn test_code_roundtrip() {
        for day in DayOfWeek::ALL {
            assert_eq!(DayOfWeek::from_code(day.code()).unwrap(), day);
        }
    }

    #[test]
    fn test_from_date() {
        // 2024-01-01 was a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DayOfWeek::from_date(monday), DayOfWeek::Mon);
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(DayOfWeek::from_date(sunday).code(), 7);
    }
}
