//! Analytics Consumer API
//!
//! This crate provides:
//! - [`AnalyticsConfig`], loaded from TOML with environment overrides
//! - Constructors for the HTTP client and the dashboard session
//! - Re-exports from SPI and core for convenience

mod config;

pub use config::{AnalyticsConfig, BASE_URL_ENV, DEFAULT_BASE_URL};

// Re-export from core
pub use analytics_core::{
    client, session, tracker, DashboardSession, HttpAnalyticsClient, Resolution, Ticket,
    ViewSlot, ViewState, DEFAULT_TIMEOUT,
};

// Re-export from SPI
pub use analytics_spi::*;

// Shaping types that appear inside the views
pub use shaping_api::{
    AlignedSeries, CapacityAdjustment, CapacityView, ComparisonRow, CorrelationMatrix,
    ForecastBands, ForecastPoint, ImpactScore, ModelComparison, ModelHealth, MonitoringStatus,
    MonitoringView, PanelLine, RiskLevel, SeasonalitySummary, Shaper, ShapingConfig,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::AnalyticsConfig;
    pub use analytics_core::{DashboardSession, HttpAnalyticsClient, Resolution, ViewState};
    pub use analytics_spi::{
        AnalyticsApi, AnalyticsError, CapacityQuery, FeatureQuery, ForecastQuery, Result,
    };
}
