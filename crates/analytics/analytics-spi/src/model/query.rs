//! Immutable filter queries. Each fetch is tagged with the query that
//! spawned it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shaping_spi::Metric;

/// Query parameters as `(name, value)` pairs.
pub type QueryParams = Vec<(&'static str, String)>;

/// Filters of the feature table and usage charts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureQuery {
    pub region: Option<String>,
    pub resource_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: u32,
    pub page_size: u32,
}

impl Default for FeatureQuery {
    fn default() -> Self {
        Self {
            region: None,
            resource_type: None,
            start_date: None,
            end_date: None,
            page: 1,
            page_size: 50,
        }
    }
}

impl FeatureQuery {
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.max(1);
        self
    }

    /// Usage metric charted for the selected resource type.
    ///
    /// Storage charts storage usage; VM, Container and no selection chart CPU.
    pub fn metric(&self) -> Metric {
        match self.resource_type.as_deref() {
            Some("Storage") => Metric::UsageStorage,
            _ => Metric::UsageCpu,
        }
    }

    pub fn params(&self) -> QueryParams {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(region) = &self.region {
            params.push(("region", region.clone()));
        }
        if let Some(resource_type) = &self.resource_type {
            params.push(("resource_type", resource_type.clone()));
        }
        if let Some(start) = self.start_date {
            params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

/// Selection of one forecast series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForecastQuery {
    pub region: String,
    pub service: String,
    pub model: String,
    /// Days ahead
    pub horizon: u32,
}

impl Default for ForecastQuery {
    fn default() -> Self {
        Self {
            region: "East US".to_string(),
            service: "VM".to_string(),
            model: "xgboost".to_string(),
            horizon: 30,
        }
    }
}

impl ForecastQuery {
    pub fn new(
        region: impl Into<String>,
        service: impl Into<String>,
        model: impl Into<String>,
        horizon: u32,
    ) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
            model: model.into(),
            horizon,
        }
    }

    pub fn params(&self) -> QueryParams {
        vec![
            ("region", self.region.clone()),
            ("service", self.service.clone()),
            ("model", self.model.clone()),
            ("horizon", self.horizon.to_string()),
        ]
    }

    /// Capacity query for the same selection.
    pub fn capacity(&self) -> CapacityQuery {
        CapacityQuery {
            region: self.region.clone(),
            service: self.service.clone(),
            model: self.model.clone(),
        }
    }
}

/// Selection of one capacity recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CapacityQuery {
    pub region: String,
    pub service: String,
    pub model: String,
}

impl CapacityQuery {
    pub fn params(&self) -> QueryParams {
        vec![
            ("region", self.region.clone()),
            ("service", self.service.clone()),
            ("model", self.model.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_defaults() {
        let query = FeatureQuery::default();
        assert_eq!(
            query.params(),
            vec![("page", "1".to_string()), ("page_size", "50".to_string())]
        );
    }

    #[test]
    fn test_feature_params_full() {
        let query = FeatureQuery::default()
            .with_region("East US")
            .with_resource_type("VM")
            .with_dates(NaiveDate::from_ymd_opt(2024, 1, 1), None)
            .with_page(2, 500);
        let params = query.params();

        assert!(params.contains(&("region", "East US".to_string())));
        assert!(params.contains(&("start_date", "2024-01-01".to_string())));
        assert!(params.contains(&("page_size", "500".to_string())));
        assert!(!params.iter().any(|(name, _)| *name == "end_date"));
    }

    #[test]
    fn test_page_is_at_least_one() {
        let query = FeatureQuery::default().with_page(0, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 1);
    }

    #[test]
    fn test_metric_by_resource_type() {
        assert_eq!(FeatureQuery::default().metric(), Metric::UsageCpu);
        assert_eq!(
            FeatureQuery::default().with_resource_type("Storage").metric(),
            Metric::UsageStorage
        );
        assert_eq!(
            FeatureQuery::default().with_resource_type("Container").metric(),
            Metric::UsageCpu
        );
    }

    #[test]
    fn test_forecast_to_capacity() {
        let query = ForecastQuery::new("West US", "Storage", "arima", 7);
        let capacity = query.capacity();
        assert_eq!(capacity.region, "West US");
        assert_eq!(capacity.params().len(), 3);
        assert_eq!(query.params()[3], ("horizon", "7".to_string()));
    }
}
