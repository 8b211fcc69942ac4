//! Human-readable analysis summary.

use skillgap_core::{AnalysisCounts, RiskTier};

/// Summarize an analysis in a couple of sentences.
pub fn summarize(counts: &AnalysisCounts, readiness: f64, risk: RiskTier) -> String {
    if counts.total_required == 0 {
        return format!("No skills required for this role. {}", risk.description());
    }

    format!(
        "You have {} out of {} required skills ({}% match). \
         You need to learn {} new skills and upgrade {} skills to be fully prepared for this role. {}",
        counts.matched,
        counts.total_required,
        readiness.round(),
        counts.gap,
        counts.partial,
        risk.description(),
    )
}
