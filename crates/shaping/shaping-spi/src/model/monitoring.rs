//! Model monitoring and comparison models.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A metric the backend sends either as a number or as text ("12.3%").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    Number(f64),
    Text(String),
}

impl Measure {
    /// Numeric value; text is parsed after stripping a trailing `%`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Measure::Number(value) => Some(*value),
            Measure::Text(text) => text.trim().trim_end_matches('%').trim().parse().ok(),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(value) => write!(f, "{}", value),
            Measure::Text(text) => f.write_str(text),
        }
    }
}

/// Latest error metrics of one model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelScore {
    #[serde(rename = "MAPE", default)]
    pub mape: Option<Measure>,
    #[serde(rename = "RMSE", default)]
    pub rmse: Option<Measure>,
    #[serde(rename = "MAE", default)]
    pub mae: Option<Measure>,
}

/// Monitoring payload: metrics per model plus the drift verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitoringStatus {
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub metrics: IndexMap<String, ModelScore>,
    #[serde(default)]
    pub error_drift: bool,
    #[serde(default)]
    pub drift_reason: Option<String>,
    #[serde(default)]
    pub retraining_needed: bool,
    #[serde(default)]
    pub last_train_date: Option<String>,
}

/// Health of a model judged by its MAPE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelHealth {
    Stable,
    Caution,
    RetrainNeeded,
    /// MAPE missing or unparseable
    Unknown,
}

impl fmt::Display for ModelHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ModelHealth::Stable => "🟢 Stable",
            ModelHealth::Caution => "🟡 Caution",
            ModelHealth::RetrainNeeded => "🔴 Retrain Needed",
            ModelHealth::Unknown => "⚪ Unknown",
        };
        f.write_str(text)
    }
}

/// One model card of the monitoring view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelHealthRow {
    pub model: String,
    /// MAPE as sent, or "N/A"
    pub mape: String,
    pub rmse: String,
    pub health: ModelHealth,
}

/// Chart-ready monitoring view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringView {
    pub rows: Vec<ModelHealthRow>,
    pub drift_detected: bool,
    pub drift_reason: Option<String>,
    /// Last retrain date, "Unknown" when absent
    pub last_retrain: String,
}

/// One row of the model comparison table as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetricsRow {
    pub model: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(rename = "MAE", default)]
    pub mae: Option<Measure>,
    #[serde(rename = "RMSE", default)]
    pub rmse: Option<Measure>,
    #[serde(rename = "MAPE", default)]
    pub mape: Option<Measure>,
    #[serde(rename = "Bias", default)]
    pub bias: Option<Measure>,
}

/// Model comparison payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    #[serde(default)]
    pub best_model: Option<String>,
    #[serde(default)]
    pub metrics: Vec<ModelMetricsRow>,
}

/// Comparison table row with the best model highlighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub model: String,
    pub kind: String,
    pub mae: String,
    pub rmse: String,
    pub mape: String,
    pub bias: String,
    pub is_best: bool,
}
