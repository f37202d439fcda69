//! Model monitoring and comparison views

use shaping_spi::{
    ComparisonRow, Measure, ModelComparison, ModelHealth, ModelHealthRow, MonitoringStatus,
    MonitoringView, ShapingConfig, UNKNOWN_LABEL,
};

const NOT_AVAILABLE: &str = "N/A";

/// Parse percent text such as `"12.5%"`.
pub fn parse_percent(text: &str) -> Option<f64> {
    text.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Health of a model from its MAPE in percent.
pub fn model_health(mape: Option<f64>, config: &ShapingConfig) -> ModelHealth {
    match mape.filter(|v| v.is_finite()) {
        None => ModelHealth::Unknown,
        Some(v) if v < config.mape_stable_below => ModelHealth::Stable,
        Some(v) if v < config.mape_caution_below => ModelHealth::Caution,
        Some(_) => ModelHealth::RetrainNeeded,
    }
}

fn display(measure: Option<&Measure>) -> String {
    measure
        .map(Measure::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Build the monitoring view, one row per model in payload order.
pub fn monitoring_view(status: &MonitoringStatus, config: &ShapingConfig) -> MonitoringView {
    let rows = status
        .metrics
        .iter()
        .map(|(model, score)| ModelHealthRow {
            model: model.clone(),
            mape: display(score.mape.as_ref()),
            rmse: display(score.rmse.as_ref()),
            health: model_health(score.mape.as_ref().and_then(Measure::as_f64), config),
        })
        .collect();

    let last_retrain = status
        .last_train_date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(UNKNOWN_LABEL)
        .to_string();

    MonitoringView {
        rows,
        drift_detected: status.error_drift,
        drift_reason: status
            .drift_reason
            .clone()
            .filter(|reason| !reason.is_empty()),
        last_retrain,
    }
}

/// Comparison table rows with the best model flagged.
pub fn comparison_rows(comparison: &ModelComparison) -> Vec<ComparisonRow> {
    comparison
        .metrics
        .iter()
        .map(|row| ComparisonRow {
            model: row.model.clone(),
            kind: row.kind.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            mae: display(row.mae.as_ref()),
            rmse: display(row.rmse.as_ref()),
            mape: display(row.mape.as_ref()),
            bias: display(row.bias.as_ref()),
            is_best: comparison.best_model.as_deref() == Some(row.model.as_str()),
        })
        .collect()
}
