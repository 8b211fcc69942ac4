//! Skill catalog items.

use serde::{Deserialize, Serialize};

use crate::error::SkillGapError;
use crate::id::SkillId;

/// A skill from the external catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Unique identifier
    pub id: SkillId,

    /// Skill name (e.g. "Python", "Django")
    pub name: String,

    /// Category
    pub category: SkillCategory,

    /// How hard the skill is to pick up
    pub difficulty: Difficulty,

    /// What the skill is used for
    #[serde(default)]
    pub description: Option<String>,
}

impl Skill {
    /// Create a skill with a fresh id.
    pub fn new(name: impl Into<String>, category: SkillCategory, difficulty: Difficulty) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            category,
            difficulty,
            description: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Skill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    /// Server-side development
    Backend,
    /// Client-side development
    Frontend,
    /// Databases and query languages
    Database,
    /// Build, deployment and operations
    DevOps,
    /// Mobile apps
    Mobile,
    /// Data science and analytics
    Data,
    /// Communication and teamwork
    SoftSkills,
    /// Anything else
    Other,
}

/// Difficulty of learning a skill.
///
/// Declared in ascending order; roadmaps schedule easier skills first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Difficulty {
    /// Beginner level
    Beginner,
    /// Intermediate level
    #[default]
    Intermediate,
    /// Advanced level
    Advanced,
}

impl Difficulty {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = SkillGapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(SkillGapError::InvalidDifficulty(s.to_string())),
        }
    }
}
