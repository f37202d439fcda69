//! reqwest-backed [`AnalyticsApi`] implementation.

use std::time::Duration;

use analytics_spi::{
    AnalyticsApi, AnalyticsError, CapacityQuery, DateRange, FeaturePage, FeatureQuery,
    ForecastQuery, ForecastResponse, InsightsResponse, MetricsResponse, RegionsResponse,
    ResourceTypesResponse, Result, TrainResponse,
};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use shaping_spi::{CapacityAdjustment, ModelComparison, MonitoringStatus};
use tracing::{debug, error};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON client for the analytics backend.
#[derive(Debug, Clone)]
pub struct HttpAnalyticsClient {
    client: Client,
    base_url: Url,
}

impl HttpAnalyticsClient {
    /// Client with the default timeout and user agent.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_options(base_url, DEFAULT_TIMEOUT, None)
    }

    /// Client with an explicit timeout and optional user agent.
    pub fn with_options(
        base_url: &str,
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = Client::builder().timeout(timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent.to_string());
        }
        let client = builder.build().map_err(|e| {
            AnalyticsError::RequestFailed(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| AnalyticsError::InvalidBaseUrl(format!("{}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, params = params.len(), "GET");

        let response = self
            .client
            .get(url.clone())
            .query(params)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, url = %url, "Failed to send request");
                AnalyticsError::RequestFailed(format!("Network error: {}", e))
            })?;

        decode(response, &url).await
    }

    async fn post_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST");

        let response = self.client.post(url.clone()).send().await.map_err(|e| {
            error!(error = %e, url = %url, "Failed to send request");
            AnalyticsError::RequestFailed(format!("Network error: {}", e))
        })?;

        decode(response, &url).await
    }
}

/// Parse a base URL and make sure joins keep its path.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| AnalyticsError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AnalyticsError::InvalidBaseUrl(format!(
            "{}: unsupported scheme '{}'",
            raw, other
        ))),
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        error!(status = %status, body = %body, url = %url, "API returned error status");
        return Err(AnalyticsError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let text = response
        .text()
        .await
        .map_err(|e| AnalyticsError::RequestFailed(format!("Failed to read body: {}", e)))?;
    serde_json::from_str(&text).map_err(|e| {
        error!(error = %e, url = %url, "Failed to parse response");
        AnalyticsError::ParseError(e.to_string())
    })
}

#[async_trait]
impl AnalyticsApi for HttpAnalyticsClient {
    async fn features(&self, query: &FeatureQuery) -> Result<FeaturePage> {
        self.get_json("/api/features", &query.params()).await
    }

    async fn regions(&self) -> Result<Vec<String>> {
        let body: RegionsResponse = self.get_json("/api/features/regions", &[]).await?;
        Ok(body.regions)
    }

    async fn resource_types(&self) -> Result<Vec<String>> {
        let body: ResourceTypesResponse =
            self.get_json("/api/features/resource-types", &[]).await?;
        Ok(body.resource_types)
    }

    async fn metrics(&self) -> Result<Vec<String>> {
        let body: MetricsResponse = self.get_json("/api/features/metrics", &[]).await?;
        Ok(body.metrics)
    }

    async fn date_range(&self) -> Result<DateRange> {
        self.get_json("/api/features/date-range", &[]).await
    }

    async fn insights(&self) -> Result<InsightsResponse> {
        self.get_json("/api/insights", &[]).await
    }

    async fn forecast(&self, query: &ForecastQuery) -> Result<ForecastResponse> {
        self.get_json("/api/forecast", &query.params()).await
    }

    async fn capacity_adjustment(&self, query: &CapacityQuery) -> Result<CapacityAdjustment> {
        self.get_json("/api/capacity-adjustment", &query.params())
            .await
    }

    async fn model_comparison(&self) -> Result<ModelComparison> {
        self.get_json("/api/model-comparison", &[]).await
    }

    async fn train_all_models(&self) -> Result<String> {
        let body: TrainResponse = self.post_json("/api/model-comparison/train-all").await?;
        Ok(body.message)
    }

    async fn monitoring(&self) -> Result<MonitoringStatus> {
        self.get_json("/api/monitoring", &[]).await
    }
}
