//! Analytics Service Provider Interface
//!
//! Queries, wire models, chart views and the [`AnalyticsApi`] contract for
//! the capacity-planning analytics backend.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::AnalyticsApi;
pub use error::{AnalyticsError, Result};
pub use model::{
    CapacityPanel, CapacityQuery, ChartData, DateRange, FeaturePage, FeatureQuery, FilterOptions,
    ForecastQuery, ForecastResponse, ForecastRow, ForecastView, InsightsResponse, InsightsView,
    MetricsResponse, ModelsView, QueryParams, RegionsResponse, ResourceTypesResponse,
    TrainResponse, UsageView,
};
