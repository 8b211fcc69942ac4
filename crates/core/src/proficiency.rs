//! Proficiency levels and their total order.

use serde::{Deserialize, Serialize};

use crate::error::SkillGapError;

/// How well a skill is held, or how well a role needs it held.
///
/// Variants are declared in rank order so the derived `Ord` is the
/// proficiency hierarchy: `Basic < Intermediate < Expert`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProficiencyLevel {
    /// Basic knowledge
    Basic = 1,
    /// Working knowledge
    Intermediate = 2,
    /// Expert level
    Expert = 3,
}

impl ProficiencyLevel {
    /// All levels, lowest first.
    pub const ALL: [ProficiencyLevel; 3] = [Self::Basic, Self::Intermediate, Self::Expert];

    /// Numeric rank (1..=3).
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this level satisfies `required`.
    pub fn meets(self, required: ProficiencyLevel) -> bool {
        self >= required
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyLevel::Basic => "Basic",
            ProficiencyLevel::Intermediate => "Intermediate",
            ProficiencyLevel::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProficiencyLevel {
    type Err = SkillGapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(ProficiencyLevel::Basic),
            "intermediate" => Ok(ProficiencyLevel::Intermediate),
            "expert" => Ok(ProficiencyLevel::Expert),
            _ => Err(SkillGapError::InvalidProficiency(s.to_string())),
        }
    }
}

impl TryFrom<u8> for ProficiencyLevel {
    type Error = SkillGapError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(ProficiencyLevel::Basic),
            2 => Ok(ProficiencyLevel::Intermediate),
            3 => Ok(ProficiencyLevel::Expert),
            other => Err(SkillGapError::InvalidProficiency(other.to_string())),
        }
    }
}
