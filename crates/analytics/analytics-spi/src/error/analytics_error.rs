//! Analytics error types

use shaping_spi::ShapingError;
use thiserror::Error;

/// Errors raised at the HTTP boundary and while configuring the client.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Connection, timeout or other transport failure
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Non-success HTTP status
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Shaping(#[from] ShapingError),
}

impl AnalyticsError {
    /// True for failures worth a transient notification rather than a reset.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AnalyticsError::RequestFailed(_)
                | AnalyticsError::Status { .. }
                | AnalyticsError::ParseError(_)
        )
    }
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = AnalyticsError::Status {
            status: 500,
            body: "Forecast serialization failed.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API returned status 500: Forecast serialization failed."
        );
        assert!(err.is_transport());
    }

    #[test]
    fn test_shaping_error_converts() {
        let err: AnalyticsError = ShapingError::InvalidDate("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid date: x");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_config_error_message() {
        let err = AnalyticsError::ConfigError("timeout_secs must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: timeout_secs must be positive"
        );
    }
}
