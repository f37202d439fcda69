//! Model module containing queries, response bodies and views

mod query;
mod response;
mod view;

pub use query::{CapacityQuery, FeatureQuery, ForecastQuery, QueryParams};
pub use response::{
    ChartData, DateRange, FeaturePage, FilterOptions, ForecastResponse, ForecastRow,
    InsightsResponse, MetricsResponse, RegionsResponse, ResourceTypesResponse, TrainResponse,
};
pub use view::{CapacityPanel, ForecastView, InsightsView, ModelsView, UsageView};
