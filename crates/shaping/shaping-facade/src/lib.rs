//! Shaping Facade
//!
//! High-level API for the data-shaping pipeline. Re-exports all public
//! types from the shaping stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use shaping_api::*;

// Explicit re-exports for documentation
pub use shaping_api::prelude;

// Re-export core modules for direct access
pub use shaping_core::{
    aggregation, alignment, capacity, correlation, forecast_band, insights, monitoring, normalize,
    seasonality,
};
