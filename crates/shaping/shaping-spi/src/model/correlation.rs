//! Correlation heatmap model.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Feature -> feature -> coefficient, in the backend's insertion order.
pub type CorrelationInput = IndexMap<String, IndexMap<String, Option<f64>>>;

/// Color class of a heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStrength {
    /// No value (missing, non-numeric or self-pair)
    Neutral,
    Weak,
    Moderate,
    Strong,
}

/// One heatmap cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationCell {
    pub row_feature: String,
    pub col_feature: String,
    /// Coefficient in [-1, 1], `None` when absent or a self-pair
    pub value: Option<f64>,
    pub strength: CellStrength,
}

/// A pair whose absolute correlation exceeds the strong threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrongPair {
    pub row_feature: String,
    pub col_feature: String,
    pub value: f64,
}

impl StrongPair {
    /// True when both pairs name the same two features in any order.
    pub fn same_features(&self, other: &StrongPair) -> bool {
        (self.row_feature == other.row_feature && self.col_feature == other.col_feature)
            || (self.row_feature == other.col_feature && self.col_feature == other.row_feature)
    }
}

impl fmt::Display for StrongPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ↔ {} ({:.2})",
            self.row_feature, self.col_feature, self.value
        )
    }
}

/// Renderable correlation matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Feature names in outer-map insertion order
    pub features: Vec<String>,
    /// Row-major grid, `features.len()` x `features.len()`
    pub grid: Vec<Vec<CorrelationCell>>,
    /// Strong pairs, each unordered pair listed once
    pub strong_pairs: Vec<StrongPair>,
    /// Human-readable conclusion
    pub summary: String,
}

impl CorrelationMatrix {
    /// Cell at (row, col), if in range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CorrelationCell> {
        self.grid.get(row).and_then(|r| r.get(col))
    }
}
