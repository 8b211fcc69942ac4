//! SkillGap core data models.
//!
//! This crate defines the inputs and outputs of the competency readiness
//! engine: skills, proficiency levels, competency and requirement entries,
//! and the immutable analysis result.

#![warn(missing_docs)]

// Core identities
mod id;
mod error;

// Inputs
mod skill;
mod proficiency;
mod entry;

// Outputs
mod analysis;
mod snapshot;

// Re-exports
pub use id::*;
pub use error::{Result, SkillGapError};

pub use skill::{Skill, SkillCategory, Difficulty};
pub use proficiency::ProficiencyLevel;
pub use entry::{CompetencyEntry, RequirementEntry};

pub use analysis::{
    AnalysisCounts, AnalysisResult, ClassifiedSkill, RecommendationGroup, RecommendationKind,
    RiskTier, SkillStatus,
};
pub use snapshot::{AnalysisSnapshot, newest_first};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
