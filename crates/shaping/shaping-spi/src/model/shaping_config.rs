//! Thresholds used by the view-model transforms.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShapingError};

/// Classification thresholds shared by the transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapingConfig {
    /// `|r|` above this is a strong correlation
    pub strong_threshold: f64,
    /// `|r|` above this is a moderate correlation
    pub moderate_threshold: f64,
    /// MAPE (percent) below this is stable
    pub mape_stable_below: f64,
    /// MAPE (percent) below this is caution
    pub mape_caution_below: f64,
    /// Demand below this share of capacity is over-provisioned
    pub over_provision_ratio: f64,
}

impl Default for ShapingConfig {
    fn default() -> Self {
        Self {
            strong_threshold: 0.8,
            moderate_threshold: 0.5,
            mape_stable_below: 15.0,
            mape_caution_below: 30.0,
            over_provision_ratio: 0.8,
        }
    }
}

impl ShapingConfig {
    /// Check that thresholds are ordered and in range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.strong_threshold) {
            return Err(invalid("strong_threshold", "must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.moderate_threshold) {
            return Err(invalid("moderate_threshold", "must be within [0, 1]"));
        }
        if self.moderate_threshold > self.strong_threshold {
            return Err(invalid(
                "moderate_threshold",
                "must not exceed strong_threshold",
            ));
        }
        if self.mape_stable_below.is_nan() || self.mape_stable_below < 0.0 {
            return Err(invalid("mape_stable_below", "must be non-negative"));
        }
        if self.mape_caution_below < self.mape_stable_below {
            return Err(invalid(
                "mape_caution_below",
                "must not be below mape_stable_below",
            ));
        }
        if !(self.over_provision_ratio > 0.0 && self.over_provision_ratio <= 1.0) {
            return Err(invalid("over_provision_ratio", "must be within (0, 1]"));
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> ShapingError {
    ShapingError::InvalidThreshold {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ShapingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strong_threshold, 0.8);
        assert_eq!(config.mape_caution_below, 30.0);
    }

    #[test]
    fn test_moderate_above_strong_rejected() {
        let config = ShapingConfig {
            moderate_threshold: 0.9,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid threshold 'moderate_threshold': must not exceed strong_threshold"
        );
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let config = ShapingConfig {
            strong_threshold: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ratio_out_of_range() {
        let config = ShapingConfig {
            over_provision_ratio: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_input_uses_defaults() {
        let config: ShapingConfig = serde_json::from_str(r#"{"strong_threshold": 0.9}"#).unwrap();
        assert_eq!(config.strong_threshold, 0.9);
        assert_eq!(config.moderate_threshold, 0.5);
    }
}
