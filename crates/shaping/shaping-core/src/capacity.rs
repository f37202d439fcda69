//! Capacity risk and recommendation

use shaping_spi::{CapacityAdjustment, CapacityView, RiskLevel, ShapingConfig};

/// Risk of running `demand` on `capacity`.
pub fn assess_risk(demand: f64, capacity: f64, config: &ShapingConfig) -> RiskLevel {
    if demand > capacity {
        RiskLevel::Shortage
    } else if demand < capacity * config.over_provision_ratio {
        RiskLevel::OverProvisioned
    } else {
        RiskLevel::Sufficient
    }
}

/// Recommendation line for the selected region and service.
pub fn recommendation(region: &str, service: &str, adjustment: &CapacityAdjustment) -> String {
    format!("{} {} → {}", region, service, adjustment.recommended_adjustment)
}

/// Capacity card for the selected region and service.
pub fn capacity_view(
    region: &str,
    service: &str,
    adjustment: &CapacityAdjustment,
    config: &ShapingConfig,
) -> CapacityView {
    CapacityView {
        region: region.to_string(),
        service: service.to_string(),
        forecast_demand: adjustment.forecast_demand,
        available_capacity: adjustment.available_capacity,
        risk: assess_risk(
            adjustment.forecast_demand,
            adjustment.available_capacity,
            config,
        ),
        recommendation: recommendation(region, service, adjustment),
    }
}
