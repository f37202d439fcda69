//! Shaping error types

use thiserror::Error;

/// Errors raised by explicit validation in the shaping pipeline.
///
/// The transforms themselves never fail: malformed rows are skipped or
/// defaulted. These variants come from the validating constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapingError {
    /// Day-of-week code outside 1..=7
    #[error("Unknown day-of-week code: {0} (expected 1-7)")]
    UnknownDayCode(i64),

    /// Date string could not be parsed as a calendar day
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Threshold configuration is inconsistent
    #[error("Invalid threshold '{name}': {reason}")]
    InvalidThreshold { name: String, reason: String },
}

/// Result type for shaping operations.
pub type Result<T> = std::result::Result<T, ShapingError>;
