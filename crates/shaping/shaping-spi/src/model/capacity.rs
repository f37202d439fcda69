//! Capacity planning models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capacity recommendation for one region/service/model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityAdjustment {
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub model: String,
    pub forecast_demand: f64,
    pub available_capacity: f64,
    /// e.g. "Increase capacity by 12.50 units"
    pub recommended_adjustment: String,
}

/// Provisioning risk of a forecast demand against available capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// Demand exceeds capacity
    Shortage,
    /// Demand well below capacity
    OverProvisioned,
    Sufficient,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RiskLevel::Shortage => "🔴 Shortage",
            RiskLevel::OverProvisioned => "🟡 Over-provisioned",
            RiskLevel::Sufficient => "🟢 Sufficient",
        };
        f.write_str(text)
    }
}

/// Chart-ready capacity card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityView {
    pub region: String,
    pub service: String,
    pub forecast_demand: f64,
    pub available_capacity: f64,
    pub risk: RiskLevel,
    /// "{region} {service} → {recommended_adjustment}"
    pub recommendation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_display() {
        assert_eq!(RiskLevel::Shortage.to_string(), "🔴 Shortage");
        assert_eq!(RiskLevel::OverProvisioned.to_string(), "🟡 Over-provisioned");
        assert_eq!(RiskLevel::Sufficient.to_string(), "🟢 Sufficient");
    }

    #[test]
    fn test_adjustment_without_echoed_keys() {
        let adj: CapacityAdjustment = serde_json::from_str(
            r#"{"forecast_demand": 120.0, "available_capacity": 100.0,
                "recommended_adjustment": "Increase capacity by 20.00 units"}"#,
        )
        .unwrap();
        assert!(adj.region.is_empty());
        assert_eq!(adj.forecast_demand, 120.0);
    }
}
