//! Trait for choosing the categorical key of a record

use crate::model::{GroupLabel, UsageRecord};

/// Picks the group a record belongs to.
pub trait KeySelector: Send + Sync {
    /// Name of the key, used in logs
    fn name(&self) -> &str;

    /// Group of one record
    fn select(&self, record: &UsageRecord) -> GroupLabel;
}
