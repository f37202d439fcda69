//! Analytics Facade
//!
//! High-level API for the analytics client. Re-exports all public types
//! from the analytics stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use analytics_api::*;

// Explicit re-exports for documentation
pub use analytics_api::prelude;
