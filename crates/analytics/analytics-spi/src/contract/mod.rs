//! Contract module containing the analytics backend trait

mod analytics_api;

pub use analytics_api::AnalyticsApi;
