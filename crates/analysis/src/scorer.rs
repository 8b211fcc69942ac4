//! Readiness scoring and risk classification.

use skillgap_core::RiskTier;

/// Risk thresholds as inclusive lower bounds, evaluated high to low.
pub const RISK_THRESHOLDS: [(f64, RiskTier); 4] = [
    (80.0, RiskTier::Low),
    (60.0, RiskTier::Medium),
    (40.0, RiskTier::High),
    (0.0, RiskTier::Critical),
];

/// A readiness percentage and its risk tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readiness {
    /// Percentage of required skills matched (0-100, 2 decimals)
    pub percentage: f64,
    /// Risk tier for `percentage`
    pub risk: RiskTier,
}

/// Score `matched` out of `total_required`.
///
/// A role with no requirements is vacuously fully ready (100%).
pub fn score(matched: usize, total_required: usize) -> Readiness {
    let percentage = if total_required == 0 {
        100.0
    } else {
        round2(100.0 * matched as f64 / total_required as f64)
    };

    Readiness {
        percentage,
        risk: risk_tier(percentage),
    }
}

/// Round to 2 decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Map a readiness percentage onto its risk tier.
pub fn risk_tier(percentage: f64) -> RiskTier {
    RISK_THRESHOLDS
        .iter()
        .find(|(lower, _)| percentage >= *lower)
        .map(|(_, tier)| *tier)
        .unwrap_or(RiskTier::Critical)
}
