//! Analysis output model - classified skills, risk, recommendations.

use serde::{Deserialize, Serialize};

use crate::proficiency::ProficiencyLevel;
use crate::skill::Skill;
use crate::snapshot::AnalysisSnapshot;

/// How a skill compares between a person and a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillStatus {
    /// Held at or above the required level
    Matched,
    /// Held, but below the required level
    Partial,
    /// Required and not held at all
    Gap,
    /// Held but not required
    Extra,
}

impl SkillStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillStatus::Matched => "MATCHED",
            SkillStatus::Partial => "PARTIAL",
            SkillStatus::Gap => "GAP",
            SkillStatus::Extra => "EXTRA",
        }
    }
}

/// A skill tagged with its comparison outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSkill {
    /// The skill
    pub skill: Skill,

    /// Comparison outcome
    pub status: SkillStatus,

    /// Level the person holds (None for gaps)
    pub current: Option<ProficiencyLevel>,

    /// Level the role needs (None for extras)
    pub required: Option<ProficiencyLevel>,

    /// Whether the held level was verified (None for gaps)
    pub verified: Option<bool>,

    /// Whether the requirement is must-have (None for extras)
    pub mandatory: Option<bool>,

    /// Remediation text for gaps and partial matches
    pub recommendation: Option<String>,
}

impl ClassifiedSkill {
    /// Whether this is a must-have skill. Extras are never mandatory.
    pub fn is_mandatory(&self) -> bool {
        self.mandatory.unwrap_or(false)
    }
}

/// Discrete placement risk derived from readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Readiness >= 80
    Low,
    /// Readiness >= 60
    Medium,
    /// Readiness >= 40
    High,
    /// Readiness < 40
    Critical,
}

impl RiskTier {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
        }
    }

    /// Fixed human-readable descriptor.
    pub fn description(&self) -> &'static str {
        match self {
            RiskTier::Low => "EXCELLENT - Very good placement chances!",
            RiskTier::Medium => "FAIR - Needs some upskilling for better chances",
            RiskTier::High => "POOR - Significant upskilling required",
            RiskTier::Critical => "CRITICAL - Major skill gaps, start learning immediately",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a recommendation group asks the person to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationKind {
    /// Learn missing must-have skills
    MandatoryGaps,
    /// Learn missing nice-to-have skills
    OptionalGaps,
    /// Raise proficiency of held skills
    ProficiencyUpgrades,
}

impl RecommendationKind {
    /// Display priority (lower = shown first).
    pub fn priority(&self) -> u32 {
        match self {
            RecommendationKind::MandatoryGaps => 1,
            RecommendationKind::OptionalGaps => 2,
            RecommendationKind::ProficiencyUpgrades => 3,
        }
    }
}

/// A prioritized group of remediation items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationGroup {
    /// Priority of this group (lower = higher priority)
    pub priority: u32,

    /// Group kind
    pub kind: RecommendationKind,

    /// Headline, including the member count
    pub title: String,

    /// Why the group matters
    pub description: String,

    /// Members, never empty
    pub skills: Vec<ClassifiedSkill>,
}

/// Classification counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisCounts {
    /// Skills held at the required level
    pub matched: usize,
    /// Skills held below the required level
    pub partial: usize,
    /// Required skills not held
    pub gap: usize,
    /// Held skills the role does not need
    pub extra: usize,
    /// Distinct required skills
    pub total_required: usize,
}

/// Result of comparing a competency set against a requirement set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Classification counts
    pub counts: AnalysisCounts,

    /// Percentage of required skills matched (0-100, 2 decimals)
    pub readiness: f64,

    /// Risk tier for `readiness`
    pub risk: RiskTier,

    /// Descriptor of `risk`
    pub risk_description: String,

    /// Matched skills, in requirement order
    pub matched: Vec<ClassifiedSkill>,

    /// Partial matches, in requirement order
    pub partial: Vec<ClassifiedSkill>,

    /// Gaps, in requirement order
    pub gaps: Vec<ClassifiedSkill>,

    /// Extra skills, in competency order
    pub extras: Vec<ClassifiedSkill>,

    /// Recommendation groups, highest priority first
    pub recommendations: Vec<RecommendationGroup>,

    /// Human-readable summary
    pub summary: String,
}

impl AnalysisResult {
    /// Whether every required skill is matched.
    pub fn is_fully_ready(&self) -> bool {
        self.counts.matched == self.counts.total_required
    }

    /// Mandatory gaps, in requirement order.
    pub fn mandatory_gaps(&self) -> impl Iterator<Item = &ClassifiedSkill> {
        self.gaps.iter().filter(|g| g.is_mandatory())
    }

    /// Capture the flat numeric fields for history tracking.
    pub fn snapshot(&self) -> AnalysisSnapshot {
        AnalysisSnapshot::new(self.counts.matched, self.counts.total_required, self.readiness)
    }
}
