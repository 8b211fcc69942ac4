//! Roadmap pacing configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Secondary ordering of gaps after mandatory-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Easier skills first
    #[default]
    Difficulty,
    /// Keep the order gaps were found in
    InputOrder,
}

/// Pacing of a learning roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapConfig {
    /// Skills scheduled per week
    pub skills_per_week: NonZeroUsize,
    /// Ordering among gaps of equal mandatory status
    pub tie_break: TieBreak,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            skills_per_week: NonZeroUsize::new(2).unwrap_or(NonZeroUsize::MIN),
            tie_break: TieBreak::default(),
        }
    }
}

impl RoadmapConfig {
    /// Create the default configuration (two skills a week, easiest first).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set skills per week.
    pub fn with_skills_per_week(mut self, skills_per_week: NonZeroUsize) -> Self {
        self.skills_per_week = skills_per_week;
        self
    }

    /// Set the tie-break.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Weeks needed for `gap_count` skills.
    pub fn weeks_for(&self, gap_count: usize) -> usize {
        gap_count.div_ceil(self.skills_per_week.get())
    }
}
