//! Error types for the analytics client

mod analytics_error;

pub use analytics_error::{AnalyticsError, Result};
