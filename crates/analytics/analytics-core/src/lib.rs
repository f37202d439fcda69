//! Analytics Core
//!
//! HTTP client for the analytics backend, stale-response tracking and the
//! dashboard session that joins fetches with the shaping transforms.

pub mod client;
pub mod session;
pub mod tracker;

// Re-export SPI types for implementations
pub use analytics_spi::{AnalyticsApi, AnalyticsError, Result};

// Re-export main types
pub use client::{HttpAnalyticsClient, DEFAULT_TIMEOUT};
pub use session::DashboardSession;
pub use tracker::{Resolution, Ticket, ViewSlot, ViewState};
