//! Contract module containing the selector traits the transforms are generic over

mod key_selector;
mod metric_selector;

pub use key_selector::KeySelector;
pub use metric_selector::MetricSelector;
