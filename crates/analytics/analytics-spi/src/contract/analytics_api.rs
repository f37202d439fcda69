//! Trait for the analytics backend

use async_trait::async_trait;
use shaping_spi::{CapacityAdjustment, ModelComparison, MonitoringStatus};

use crate::error::Result;
use crate::model::{
    CapacityQuery, DateRange, FeaturePage, FeatureQuery, ForecastQuery, ForecastResponse,
    InsightsResponse,
};

/// Read-mostly JSON API of the analytics backend.
///
/// Implementations only fetch and decode; shaping happens in the caller.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// `GET /api/features`
    async fn features(&self, query: &FeatureQuery) -> Result<FeaturePage>;

    /// `GET /api/features/regions`
    async fn regions(&self) -> Result<Vec<String>>;

    /// `GET /api/features/resource-types`
    async fn resource_types(&self) -> Result<Vec<String>>;

    /// `GET /api/features/metrics`
    async fn metrics(&self) -> Result<Vec<String>>;

    /// `GET /api/features/date-range`
    async fn date_range(&self) -> Result<DateRange>;

    /// `GET /api/insights`
    async fn insights(&self) -> Result<InsightsResponse>;

    /// `GET /api/forecast`
    async fn forecast(&self, query: &ForecastQuery) -> Result<ForecastResponse>;

    /// `GET /api/capacity-adjustment`
    async fn capacity_adjustment(&self, query: &CapacityQuery) -> Result<CapacityAdjustment>;

    /// `GET /api/model-comparison`
    async fn model_comparison(&self) -> Result<ModelComparison>;

    /// `POST /api/model-comparison/train-all`, returning the backend's message
    async fn train_all_models(&self) -> Result<String>;

    /// `GET /api/monitoring`
    async fn monitoring(&self) -> Result<MonitoringStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    /// Mock implementation: serves fixed option lists and fails everything else
    struct OptionsOnly;

    #[async_trait]
    impl AnalyticsApi for OptionsOnly {
        async fn features(&self, _query: &FeatureQuery) -> Result<FeaturePage> {
            Ok(FeaturePage::default())
        }

        async fn regions(&self) -> Result<Vec<String>> {
            Ok(vec!["East US".to_string()])
        }

        async fn resource_types(&self) -> Result<Vec<String>> {
            Ok(vec!["VM".to_string(), "Storage".to_string()])
        }

        async fn metrics(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        async fn date_range(&self) -> Result<DateRange> {
            Ok(DateRange::default())
        }

        async fn insights(&self) -> Result<InsightsResponse> {
            Err(AnalyticsError::RequestFailed("offline".to_string()))
        }

        async fn forecast(&self, _query: &ForecastQuery) -> Result<ForecastResponse> {
            Err(AnalyticsError::RequestFailed("offline".to_string()))
        }

        async fn capacity_adjustment(&self, _query: &CapacityQuery) -> Result<CapacityAdjustment> {
            Err(AnalyticsError::RequestFailed("offline".to_string()))
        }

        async fn model_comparison(&self) -> Result<ModelComparison> {
            Err(AnalyticsError::RequestFailed("offline".to_string()))
        }

        async fn train_all_models(&self) -> Result<String> {
            Err(AnalyticsError::RequestFailed("offline".to_string()))
        }

        async fn monitoring(&self) -> Result<MonitoringStatus> {
            Err(AnalyticsError::RequestFailed("offline".to_string()))
        }
    }

    #[tokio::test]
    async fn test_trait_object_dispatch() {
        let api: Box<dyn AnalyticsApi> = Box::new(OptionsOnly);
        assert_eq!(api.regions().await.unwrap(), vec!["East US"]);
        assert_eq!(api.resource_types().await.unwrap().len(), 2);
        assert!(api.insights().await.is_err());
    }

    #[test]
    fn test_api_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OptionsOnly>();
    }
}
