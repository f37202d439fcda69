//! Dashboard session
//!
//! Owns one [`ViewSlot`] per view. A refresh selects its query, fetches
//! without holding the slot, shapes the payload and resolves the ticket,
//! so overlapping refreshes leave only the latest selection on screen.

use std::sync::Arc;

use analytics_spi::{
    AnalyticsApi, AnalyticsError, CapacityPanel, FeaturePage, FeatureQuery, FilterOptions,
    ForecastQuery, ForecastResponse, ForecastView, InsightsResponse, InsightsView, ModelsView,
    Result, UsageView,
};
use shaping_api::{
    backtest_lines, compare_regions, forecast_only, label_day_stats, monthly_trend_lines,
    peak_day_lines, seasonal_points, seasonality_summary, top_region_lines, Shaper,
};
use shaping_spi::{CapacityAdjustment, ModelComparison, MonitoringStatus, MonitoringView};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::tracker::{Resolution, Ticket, ViewSlot, ViewState};

/// Target column of the external factors panel.
const IMPACT_TARGET: &str = "usage_cpu";

/// Dashboard state driven by an [`AnalyticsApi`].
pub struct DashboardSession<A> {
    api: Arc<A>,
    shaper: Shaper,
    usage: Mutex<ViewSlot<FeatureQuery, UsageView>>,
    forecast: Mutex<ViewSlot<ForecastQuery, ForecastView>>,
    capacity: Mutex<ViewSlot<ForecastQuery, CapacityPanel>>,
    insights: Mutex<ViewSlot<(), InsightsView>>,
    monitoring: Mutex<ViewSlot<(), MonitoringView>>,
    models: Mutex<ViewSlot<(), ModelsView>>,
}

impl<A: AnalyticsApi> DashboardSession<A> {
    pub fn new(api: A, shaper: Shaper) -> Self {
        Self::from_shared(Arc::new(api), shaper)
    }

    pub fn from_shared(api: Arc<A>, shaper: Shaper) -> Self {
        Self {
            api,
            shaper,
            usage: Mutex::new(ViewSlot::new()),
            forecast: Mutex::new(ViewSlot::new()),
            capacity: Mutex::new(ViewSlot::new()),
            insights: Mutex::new(ViewSlot::new()),
            monitoring: Mutex::new(ViewSlot::new()),
            models: Mutex::new(ViewSlot::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn shaper(&self) -> &Shaper {
        &self.shaper
    }

    /// Regions, resource types and date range, fetched concurrently.
    pub async fn load_filter_options(&self) -> Result<FilterOptions> {
        let (regions, resource_types, date_range) = tokio::try_join!(
            self.api.regions(),
            self.api.resource_types(),
            self.api.date_range(),
        )?;
        debug!(
            regions = regions.len(),
            resource_types = resource_types.len(),
            "loaded filter options"
        );
        Ok(FilterOptions {
            regions,
            resource_types,
            date_range,
        })
    }

    pub async fn refresh_usage(&self, query: FeatureQuery) -> Resolution {
        let ticket = self.usage.lock().await.select(query.clone());
        let outcome = self
            .api
            .features(&query)
            .await
            .map(|page| self.shape_usage(&query, page));
        resolve(&self.usage, ticket, outcome, "usage").await
    }

    pub async fn refresh_forecast(&self, query: ForecastQuery) -> Resolution {
        let ticket = self.forecast.lock().await.select(query.clone());
        let outcome = self
            .api
            .forecast(&query)
            .await
            .map(|body| self.shape_forecast(&body));
        resolve(&self.forecast, ticket, outcome, "forecast").await
    }

    /// Demand forecast and capacity recommendation for one selection.
    pub async fn refresh_capacity(&self, query: ForecastQuery) -> Resolution {
        let ticket = self.capacity.lock().await.select(query.clone());
        let capacity_query = query.capacity();
        let outcome = tokio::try_join!(
            self.api.forecast(&query),
            self.api.capacity_adjustment(&capacity_query),
        )
        .map(|(forecast, adjustment)| self.shape_capacity(&query, &forecast, &adjustment));
        resolve(&self.capacity, ticket, outcome, "capacity").await
    }

    pub async fn refresh_insights(&self) -> Resolution {
        let ticket = self.insights.lock().await.select(());
        let outcome = self
            .api
            .insights()
            .await
            .map(|body| self.shape_insights(&body));
        resolve(&self.insights, ticket, outcome, "insights").await
    }

    pub async fn refresh_monitoring(&self) -> Resolution {
        let ticket = self.monitoring.lock().await.select(());
        let outcome = self
            .api
            .monitoring()
            .await
            .map(|status| self.shape_monitoring(&status));
        resolve(&self.monitoring, ticket, outcome, "monitoring").await
    }

    pub async fn refresh_models(&self) -> Resolution {
        let ticket = self.models.lock().await.select(());
        let outcome = self
            .api
            .model_comparison()
            .await
            .map(|comparison| self.shape_models(&comparison));
        resolve(&self.models, ticket, outcome, "models").await
    }

    /// Retrain every model, then reload the comparison table.
    pub async fn train_all_models(&self) -> Result<Resolution> {
        let message = self.api.train_all_models().await?;
        info!(message = %message, "model training finished");
        Ok(self.refresh_models().await)
    }

    pub async fn usage(&self) -> ViewState<UsageView> {
        self.usage.lock().await.state().clone()
    }

    pub async fn forecast(&self) -> ViewState<ForecastView> {
        self.forecast.lock().await.state().clone()
    }

    pub async fn capacity(&self) -> ViewState<CapacityPanel> {
        self.capacity.lock().await.state().clone()
    }

    pub async fn insights(&self) -> ViewState<InsightsView> {
        self.insights.lock().await.state().clone()
    }

    pub async fn monitoring(&self) -> ViewState<MonitoringView> {
        self.monitoring.lock().await.state().clone()
    }

    pub async fn models(&self) -> ViewState<ModelsView> {
        self.models.lock().await.state().clone()
    }

    fn shape_usage(&self, query: &FeatureQuery, page: FeaturePage) -> UsageView {
        let records = self.shaper.records(&page.data);
        UsageView {
            rows: records.len(),
            total: page.total,
            overlay: self.shaper.region_overlay(&records, &query.metric()),
            day_of_week: self.shaper.day_of_week_stats(&records),
            regional: self.shaper.regional_stats(&records),
        }
    }

    fn shape_forecast(&self, body: &ForecastResponse) -> ForecastView {
        let points = body.points();
        ForecastView {
            bands: self.shaper.forecast_bands(&points),
            forecast_rows: forecast_only(&points),
        }
    }

    fn shape_capacity(
        &self,
        query: &ForecastQuery,
        forecast: &ForecastResponse,
        adjustment: &CapacityAdjustment,
    ) -> CapacityPanel {
        CapacityPanel {
            bands: self.shaper.forecast_bands(&forecast.points()),
            capacity: self
                .shaper
                .capacity(&query.region, &query.service, adjustment),
        }
    }

    fn shape_insights(&self, body: &InsightsResponse) -> InsightsView {
        let chart = &body.chart_data;
        let seasonality = seasonal_points(&chart.seasonality);
        let seasonality_summary = seasonality_summary(&seasonality);
        InsightsView {
            heatmap: self.shaper.correlation_matrix(&body.correlations),
            impact: self.shaper.impact_scores(&body.correlations, IMPACT_TARGET),
            day_of_week: label_day_stats(&chart.day_of_week_stats),
            regional_stats: chart.regional_stats.clone(),
            peak_usage: chart.peak_usage.clone(),
            seasonality,
            seasonality_summary,
            comparison: compare_regions(&body.comparison),
            overlay: self.shaper.time_series_overlay(&chart.time_series),
            top_regions: top_region_lines(&body.top_regions_by_utilization),
            peak_days: peak_day_lines(&body.peak_usage_days),
            monthly_trend: monthly_trend_lines(&body.monthly_cpu_trend),
            backtest: backtest_lines(&body.backtest_summary),
        }
    }

    fn shape_monitoring(&self, status: &MonitoringStatus) -> MonitoringView {
        self.shaper.monitoring(status)
    }

    fn shape_models(&self, comparison: &ModelComparison) -> ModelsView {
        ModelsView {
            best_model: comparison.best_model.clone(),
            rows: self.shaper.model_comparison(comparison),
        }
    }
}

async fn resolve<Q, T>(
    slot: &Mutex<ViewSlot<Q, T>>,
    ticket: Ticket<Q>,
    outcome: std::result::Result<T, AnalyticsError>,
    view: &'static str,
) -> Resolution
where
    Q: Clone + PartialEq,
{
    let resolution = slot.lock().await.resolve(ticket, outcome);
    match &resolution {
        Resolution::Applied => info!(view, "view updated"),
        Resolution::Stale => debug!(view, "discarded superseded response"),
        Resolution::Failed {
            error,
            kept_previous,
        } => warn!(view, error = %error, kept_previous, "view refresh failed"),
    }
    resolution
}
