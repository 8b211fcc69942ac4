//! Historical snapshots of analysis runs.

use serde::{Deserialize, Serialize};

use crate::id::SnapshotId;
use crate::Time;

/// Flat record of one analysis run, for callers that keep history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    /// Unique identifier
    pub id: SnapshotId,

    /// When the analysis ran
    pub analyzed_at: Time,

    /// Skills matched
    pub skills_matched: usize,

    /// Distinct required skills
    pub total_required: usize,

    /// Readiness percentage
    pub readiness: f64,
}

impl AnalysisSnapshot {
    /// Create a snapshot taken now.
    pub fn new(skills_matched: usize, total_required: usize, readiness: f64) -> Self {
        Self {
            id: SnapshotId::new(),
            analyzed_at: chrono::Utc::now(),
            skills_matched,
            total_required,
            readiness,
        }
    }

    /// Readiness change relative to an earlier snapshot.
    pub fn delta_since(&self, earlier: &AnalysisSnapshot) -> f64 {
        self.readiness - earlier.readiness
    }
}

/// Order snapshots newest first.
pub fn newest_first(snapshots: &mut [AnalysisSnapshot]) {
    snapshots.sort_by(|a, b| b.analyzed_at.cmp(&a.analyzed_at));
}
