//! Correlation matrix builder

use indexmap::IndexMap;
use serde_json::Value;
use shaping_spi::{
    CellStrength, CorrelationCell, CorrelationInput, CorrelationMatrix, ImpactScore,
    ShapingConfig, StrongPair,
};
use tracing::debug;

const NO_STRONG_SUMMARY: &str =
    "No strong correlations detected. Feature relationships appear weak or independent.";

/// Read a `{feature: {feature: r}}` JSON object, keeping key order.
///
/// Non-object input yields an empty map; non-numeric coefficients become `None`.
pub fn correlation_input_from_json(value: &Value) -> CorrelationInput {
    let Some(outer) = value.as_object() else {
        return CorrelationInput::new();
    };
    outer
        .iter()
        .map(|(row, inner)| {
            let cells: IndexMap<String, Option<f64>> = inner
                .as_object()
                .map(|cols| {
                    cols.iter()
                        .map(|(col, v)| (col.clone(), v.as_f64().filter(|r| r.is_finite())))
                        .collect()
                })
                .unwrap_or_default();
            (row.clone(), cells)
        })
        .collect()
}

/// Classify a coefficient with the default thresholds.
pub fn classify(value: Option<f64>) -> CellStrength {
    classify_with(value, &ShapingConfig::default())
}

/// Classify a coefficient; every input falls into exactly one class.
pub fn classify_with(value: Option<f64>, config: &ShapingConfig) -> CellStrength {
    match value.filter(|v| v.is_finite()).map(f64::abs) {
        None => CellStrength::Neutral,
        Some(r) if r > config.strong_threshold => CellStrength::Strong,
        Some(r) if r > config.moderate_threshold => CellStrength::Moderate,
        Some(_) => CellStrength::Weak,
    }
}

/// Build the heatmap grid, the strong pairs and the summary sentence.
///
/// Self-pairs and absent values are neutral cells with no value. Each
/// unordered strong pair is listed once, in the orientation and with the
/// value of its first occurrence in row-major order.
pub fn build_matrix(input: &CorrelationInput, config: &ShapingConfig) -> CorrelationMatrix {
    let features: Vec<String> = input.keys().cloned().collect();
    let mut strong_pairs: Vec<StrongPair> = Vec::new();

    let grid: Vec<Vec<CorrelationCell>> = features
        .iter()
        .map(|row| {
            features
                .iter()
                .map(|col| {
                    let value = if row == col {
                        None
                    } else {
                        input
                            .get(row)
                            .and_then(|cols| cols.get(col))
                            .copied()
                            .flatten()
                            .filter(|v| v.is_finite())
                    };
                    let strength = classify_with(value, config);

                    if let (CellStrength::Strong, Some(v)) = (strength, value) {
                        let pair = StrongPair {
                            row_feature: row.clone(),
                            col_feature: col.clone(),
                            value: v,
                        };
                        if !strong_pairs.iter().any(|p| p.same_features(&pair)) {
                            strong_pairs.push(pair);
                        }
                    }

                    CorrelationCell {
                        row_feature: row.clone(),
                        col_feature: col.clone(),
                        value,
                        strength,
                    }
                })
                .collect()
        })
        .collect();

    let summary = summarize(&strong_pairs);
    debug!(
        features = features.len(),
        strong = strong_pairs.len(),
        "built correlation matrix"
    );

    CorrelationMatrix {
        features,
        grid,
        strong_pairs,
        summary,
    }
}

fn summarize(pairs: &[StrongPair]) -> String {
    if pairs.is_empty() {
        return NO_STRONG_SUMMARY.to_string();
    }
    let listed: Vec<String> = pairs.iter().map(StrongPair::to_string).collect();
    format!(
        "Strong correlations detected between: {}. These relationships may indicate redundancy or strong dependency between features.",
        listed.join(", ")
    )
}

/// Correlation of every other factor against `target`, for the external
/// factors panel.
pub fn impact_on(input: &CorrelationInput, target: &str) -> Vec<ImpactScore> {
    input
        .iter()
        .filter(|(factor, _)| factor.as_str() != target)
        .map(|(factor, cols)| ImpactScore {
            factor: factor.clone(),
            label: factor.replace('_', " "),
            score: cols.get(target).copied().flatten(),
        })
        .collect()
}
