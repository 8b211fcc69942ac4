//! Analysis inputs: what a person knows and what a role requires.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::SkillId;
use crate::proficiency::ProficiencyLevel;
use crate::skill::Skill;

/// A skill a person currently holds.
///
/// A person should have at most one entry per skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetencyEntry {
    /// The skill held
    pub skill: Skill,

    /// Self-reported proficiency
    pub proficiency: ProficiencyLevel,

    /// Whether an administrator verified the claim
    #[serde(default)]
    pub verified: bool,
}

impl CompetencyEntry {
    /// Create an unverified competency.
    pub fn new(skill: Skill, proficiency: ProficiencyLevel) -> Self {
        Self {
            skill,
            proficiency,
            verified: false,
        }
    }

    /// Create a competency from a textual proficiency level.
    pub fn parse(skill: Skill, proficiency: &str, verified: bool) -> Result<Self> {
        Ok(Self {
            skill,
            proficiency: proficiency.parse()?,
            verified,
        })
    }

    /// Mark the competency as verified.
    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }

    /// Id of the held skill.
    pub fn skill_id(&self) -> SkillId {
        self.skill.id
    }
}

/// A skill a role demands, at a minimum proficiency.
///
/// A role should have at most one entry per skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementEntry {
    /// The required skill
    pub skill: Skill,

    /// Minimum proficiency
    pub proficiency: ProficiencyLevel,

    /// Must-have (true) or nice-to-have (false)
    #[serde(default = "default_mandatory")]
    pub mandatory: bool,
}

fn default_mandatory() -> bool {
    true
}

impl RequirementEntry {
    /// Create a mandatory requirement.
    pub fn new(skill: Skill, proficiency: ProficiencyLevel) -> Self {
        Self {
            skill,
            proficiency,
            mandatory: true,
        }
    }

    /// Create a requirement from a textual proficiency level.
    pub fn parse(skill: Skill, proficiency: &str, mandatory: bool) -> Result<Self> {
        Ok(Self {
            skill,
            proficiency: proficiency.parse()?,
            mandatory,
        })
    }

    /// Mark the requirement as nice-to-have.
    pub fn optional(mut self) -> Self {
        self.mandatory = false;
        self
    }

    /// Id of the required skill.
    pub fn skill_id(&self) -> SkillId {
        self.skill.id
    }
}
