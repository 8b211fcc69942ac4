//! Week-by-week learning roadmap.

use serde::{Deserialize, Serialize};
use skillgap_core::{AnalysisResult, ClassifiedSkill, Difficulty};
use tracing::{debug, info};

use crate::catalog::{CatalogEntry, CatalogLookup};
use crate::config::{RoadmapConfig, TieBreak};

/// One week of a learning roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapWeek {
    /// Week number, starting at 1
    pub week: usize,

    /// Gap skills to learn this week, in schedule order
    pub skills: Vec<ClassifiedSkill>,

    /// Catalog hours for this week's skills
    pub estimated_hours: u32,
}

/// A learning roadmap covering every gap of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPlan {
    /// Number of weeks
    pub total_weeks: usize,

    /// Weekly schedule
    pub weeks: Vec<RoadmapWeek>,

    /// Human-readable summary
    pub message: String,
}

impl RoadmapPlan {
    fn empty() -> Self {
        Self {
            total_weeks: 0,
            weeks: Vec::new(),
            message: "No upskilling needed: no skill gaps for this role.".to_string(),
        }
    }

    /// Whether the roadmap has no weeks.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Total estimated hours across all weeks, capped at `u32::MAX`.
    pub fn total_hours(&self) -> u32 {
        self.weeks
            .iter()
            .fold(0u32, |total, w| total.saturating_add(w.estimated_hours))
    }
}

/// Turns the gaps of an analysis into a weekly schedule.
#[derive(Debug, Clone, Default)]
pub struct RoadmapPlanner {
    config: RoadmapConfig,
}

impl RoadmapPlanner {
    /// Create a planner.
    pub fn new(config: RoadmapConfig) -> Self {
        Self { config }
    }

    /// Pacing in use.
    pub fn config(&self) -> &RoadmapConfig {
        &self.config
    }

    /// Schedule the gaps of `result`.
    ///
    /// Mandatory gaps come first, then the configured tie-break applies; the
    /// sort is stable so equal keys keep their analysis order. Skills the
    /// catalog does not know count as zero hours.
    pub fn plan<C>(&self, result: &AnalysisResult, catalog: &C) -> RoadmapPlan
    where
        C: CatalogLookup + ?Sized,
    {
        if result.gaps.is_empty() {
            info!("No skill gaps, roadmap is empty");
            return RoadmapPlan::empty();
        }

        let mut ordered: Vec<(&ClassifiedSkill, Option<CatalogEntry>)> = result
            .gaps
            .iter()
            .map(|gap| {
                let entry = catalog.lookup(&gap.skill.id);
                if entry.is_none() {
                    debug!("No catalog entry for {}, assuming 0 hours", gap.skill.name);
                }
                (gap, entry)
            })
            .collect();

        let tie_break = self.config.tie_break;
        ordered.sort_by(|(a, a_entry), (b, b_entry)| {
            let primary = b.is_mandatory().cmp(&a.is_mandatory());
            match tie_break {
                TieBreak::Difficulty => primary.then_with(|| {
                    difficulty(a, a_entry).cmp(&difficulty(b, b_entry))
                }),
                TieBreak::InputOrder => primary,
            }
        });

        let weeks: Vec<RoadmapWeek> = ordered
            .chunks(self.config.skills_per_week.get())
            .enumerate()
            .map(|(i, chunk)| RoadmapWeek {
                week: i + 1,
                skills: chunk.iter().map(|(gap, _)| (*gap).clone()).collect(),
                estimated_hours: chunk
                    .iter()
                    .map(|(_, entry)| entry.map_or(0, |e| e.estimated_hours))
                    .fold(0u32, u32::saturating_add),
            })
            .collect();

        let total_weeks = weeks.len();
        info!(
            "Planned {} gaps over {} weeks",
            result.gaps.len(),
            total_weeks
        );

        RoadmapPlan {
            total_weeks,
            weeks,
            message: format!(
                "Complete upskilling possible in approximately {} weeks!",
                total_weeks
            ),
        }
    }
}

/// Catalog difficulty when known, otherwise the skill's own.
fn difficulty(gap: &ClassifiedSkill, entry: &Option<CatalogEntry>) -> Difficulty {
    entry.map_or(gap.skill.difficulty, |e| e.difficulty)
}

/// Schedule the gaps of `result` with the default pacing.
pub fn roadmap<C>(result: &AnalysisResult, catalog: &C) -> RoadmapPlan
where
    C: CatalogLookup + ?Sized,
{
    RoadmapPlanner::default().plan(result, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgap_core::{
        AnalysisCounts, ProficiencyLevel, RiskTier, Skill, SkillCategory, SkillId, SkillStatus,
    };
    use std::collections::HashMap;
    use std::num::NonZeroUsize;

    fn gap(name: &str, difficulty: Difficulty, mandatory: bool) -> ClassifiedSkill {
        ClassifiedSkill {
            skill: Skill::new(name, SkillCategory::Other, difficulty),
            status: SkillStatus::Gap,
            current: None,
            required: Some(ProficiencyLevel::Intermediate),
            verified: None,
            mandatory: Some(mandatory),
            recommendation: Some(format!("Learn {} from scratch", name)),
        }
    }

    fn result_with(gaps: Vec<ClassifiedSkill>) -> AnalysisResult {
        AnalysisResult {
            counts: AnalysisCounts {
                gap: gaps.len(),
                total_required: gaps.len(),
                ..Default::default()
            },
            readiness: 0.0,
            risk: RiskTier::Critical,
            risk_description: RiskTier::Critical.description().to_string(),
            matched: vec![],
            partial: vec![],
            gaps,
            extras: vec![],
            recommendations: vec![],
            summary: String::new(),
        }
    }

    fn names(plan: &RoadmapPlan) -> Vec<Vec<String>> {
        plan.weeks
            .iter()
            .map(|w| w.skills.iter().map(|s| s.skill.name.clone()).collect())
            .collect()
    }

    #[test]
    fn test_no_gaps_no_weeks() {
        let catalog: HashMap<SkillId, CatalogEntry> = HashMap::new();
        let plan = roadmap(&result_with(vec![]), &catalog);
        assert_eq!(plan.total_weeks, 0);
        assert!(plan.is_empty());
        assert!(plan.message.starts_with("No upskilling needed"));
    }

    #[test]
    fn test_mandatory_then_difficulty() {
        let result = result_with(vec![
            gap("Kubernetes", Difficulty::Advanced, false),
            gap("Django", Difficulty::Advanced, true),
            gap("Git", Difficulty::Beginner, true),
            gap("HTML", Difficulty::Beginner, false),
            gap("SQL", Difficulty::Intermediate, true),
        ]);
        let catalog: HashMap<SkillId, CatalogEntry> = HashMap::new();

        let plan = roadmap(&result, &catalog);
        assert_eq!(plan.total_weeks, 3);
        assert_eq!(
            names(&plan),
            vec![
                vec!["Git".to_string(), "SQL".to_string()],
                vec!["Django".to_string(), "HTML".to_string()],
                vec!["Kubernetes".to_string()],
            ]
        );
        assert_eq!(plan.weeks[2].week, 3);
        assert_eq!(plan.total_hours(), 0);
    }

    #[test]
    fn test_catalog_difficulty_overrides_skill() {
        let hard = gap("Rust", Difficulty::Beginner, true);
        let easy = gap("Bash", Difficulty::Advanced, true);
        let mut catalog = HashMap::new();
        catalog.insert(
            hard.skill.id,
            CatalogEntry {
                difficulty: Difficulty::Advanced,
                estimated_hours: 40,
            },
        );
        catalog.insert(
            easy.skill.id,
            CatalogEntry {
                difficulty: Difficulty::Beginner,
                estimated_hours: 5,
            },
        );

        let plan = roadmap(&result_with(vec![hard, easy]), &catalog);
        assert_eq!(names(&plan), vec![vec!["Bash".to_string(), "Rust".to_string()]]);
        assert_eq!(plan.weeks[0].estimated_hours, 45);
    }

    #[test]
    fn test_input_order_tie_break() {
        let result = result_with(vec![
            gap("C", Difficulty::Advanced, true),
            gap("B", Difficulty::Beginner, false),
            gap("A", Difficulty::Beginner, true),
        ]);
        let config = RoadmapConfig::default()
            .with_tie_break(TieBreak::InputOrder)
            .with_skills_per_week(NonZeroUsize::new(1).unwrap());
        let catalog: HashMap<SkillId, CatalogEntry> = HashMap::new();

        let plan = RoadmapPlanner::new(config).plan(&result, &catalog);
        assert_eq!(plan.total_weeks, 3);
        assert_eq!(
            names(&plan),
            vec![vec!["C".to_string()], vec!["A".to_string()], vec!["B".to_string()]]
        );
    }

    #[test]
    fn test_week_hours_saturate() {
        let result = result_with(vec![
            gap("Fortran", Difficulty::Advanced, true),
            gap("COBOL", Difficulty::Advanced, true),
            gap("Ada", Difficulty::Advanced, true),
        ]);
        let catalog: HashMap<SkillId, CatalogEntry> = result
            .gaps
            .iter()
            .map(|g| {
                (
                    g.skill.id,
                    CatalogEntry {
                        difficulty: Difficulty::Advanced,
                        estimated_hours: 3_000_000_000,
                    },
                )
            })
            .collect();

        let plan = roadmap(&result, &catalog);
        assert_eq!(plan.weeks[0].estimated_hours, u32::MAX);
        assert_eq!(plan.weeks[1].estimated_hours, 3_000_000_000);
        assert_eq!(plan.total_hours(), u32::MAX);
    }

    #[test]
    fn test_dyn_catalog() {
        let catalog: HashMap<SkillId, CatalogEntry> = HashMap::new();
        let lookup: &dyn CatalogLookup = &catalog;
        let plan = roadmap(&result_with(vec![gap("Go", Difficulty::Beginner, true)]), lookup);
        assert_eq!(plan.total_weeks, 1);
        assert_eq!(plan.message, "Complete upskilling possible in approximately 1 weeks!");
    }
}
