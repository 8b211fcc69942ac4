//! Competency comparison.
//!
//! Classifies every skill of a competency set and a requirement set as
//! matched, partial, gap or extra, then scores and summarizes the outcome.

use std::collections::HashMap;

use skillgap_core::{
    AnalysisCounts, AnalysisResult, ClassifiedSkill, CompetencyEntry, RequirementEntry, SkillId,
    SkillStatus,
};
use tracing::{debug, info};

use crate::recommendation::build_recommendations;
use crate::scorer::score;
use crate::summary::summarize;

/// Compares what a person knows against what a role requires.
///
/// Both inputs are indexed by skill id on construction. Each set should hold
/// one entry per skill; when it does not, the last entry for a skill wins
/// while the skill keeps the position of its first appearance.
#[derive(Debug, Clone)]
pub struct CompetencyComparator<'a> {
    /// Held skills by id
    held: HashMap<SkillId, &'a CompetencyEntry>,
    /// Held skill ids in first-seen order
    held_order: Vec<SkillId>,
    /// Position of each required skill in `required`
    required_index: HashMap<SkillId, usize>,
    /// Requirements in first-seen order
    required: Vec<&'a RequirementEntry>,
}

impl<'a> CompetencyComparator<'a> {
    /// Index a competency set and a requirement set.
    pub fn new(competencies: &'a [CompetencyEntry], requirements: &'a [RequirementEntry]) -> Self {
        let mut held = HashMap::with_capacity(competencies.len());
        let mut held_order = Vec::with_capacity(competencies.len());
        for entry in competencies {
            if held.insert(entry.skill_id(), entry).is_none() {
                held_order.push(entry.skill_id());
            }
        }

        let mut required_index = HashMap::with_capacity(requirements.len());
        let mut required: Vec<&RequirementEntry> = Vec::with_capacity(requirements.len());
        for entry in requirements {
            match required_index.get(&entry.skill_id()) {
                Some(&pos) => required[pos] = entry,
                None => {
                    required_index.insert(entry.skill_id(), required.len());
                    required.push(entry);
                }
            }
        }

        Self {
            held,
            held_order,
            required_index,
            required,
        }
    }

    /// Run the comparison.
    pub fn analyze(&self) -> AnalysisResult {
        debug!(
            "Comparing {} competencies against {} requirements",
            self.held.len(),
            self.required.len()
        );

        let mut matched = Vec::new();
        let mut partial = Vec::new();
        let mut gaps = Vec::new();

        for req in &self.required {
            match self.held.get(&req.skill_id()) {
                None => gaps.push(ClassifiedSkill {
                    skill: req.skill.clone(),
                    status: SkillStatus::Gap,
                    current: None,
                    required: Some(req.proficiency),
                    verified: None,
                    mandatory: Some(req.mandatory),
                    recommendation: Some(format!("Learn {} from scratch", req.skill.name)),
                }),
                Some(have) if have.proficiency.meets(req.proficiency) => {
                    matched.push(ClassifiedSkill {
                        skill: req.skill.clone(),
                        status: SkillStatus::Matched,
                        current: Some(have.proficiency),
                        required: Some(req.proficiency),
                        verified: Some(have.verified),
                        mandatory: Some(req.mandatory),
                        recommendation: None,
                    })
                }
                Some(have) => partial.push(ClassifiedSkill {
                    skill: req.skill.clone(),
                    status: SkillStatus::Partial,
                    current: Some(have.proficiency),
                    required: Some(req.proficiency),
                    verified: Some(have.verified),
                    mandatory: Some(req.mandatory),
                    recommendation: Some(format!(
                        "Upgrade {} from {} to {}",
                        req.skill.name, have.proficiency, req.proficiency
                    )),
                }),
            }
        }

        let extras: Vec<ClassifiedSkill> = self
            .held_order
            .iter()
            .filter(|id| !self.required_index.contains_key(*id))
            .filter_map(|id| self.held.get(id))
            .map(|have| ClassifiedSkill {
                skill: have.skill.clone(),
                status: SkillStatus::Extra,
                current: Some(have.proficiency),
                required: None,
                verified: Some(have.verified),
                mandatory: None,
                recommendation: None,
            })
            .collect();

        let counts = AnalysisCounts {
            matched: matched.len(),
            partial: partial.len(),
            gap: gaps.len(),
            extra: extras.len(),
            total_required: self.required.len(),
        };
        let readiness = score(counts.matched, counts.total_required);
        let recommendations = build_recommendations(&gaps, &partial);
        let summary = summarize(&counts, readiness.percentage, readiness.risk);

        info!(
            "Analysis complete: {}/{} matched, {} partial, {} gaps, readiness {:.2}% ({})",
            counts.matched,
            counts.total_required,
            counts.partial,
            counts.gap,
            readiness.percentage,
            readiness.risk
        );

        AnalysisResult {
            counts,
            readiness: readiness.percentage,
            risk: readiness.risk,
            risk_description: readiness.risk.description().to_string(),
            matched,
            partial,
            gaps,
            extras,
            recommendations,
            summary,
        }
    }
}

/// Compare a competency set against a requirement set.
pub fn analyze(
    competencies: &[CompetencyEntry],
    requirements: &[RequirementEntry],
) -> AnalysisResult {
    CompetencyComparator::new(competencies, requirements).analyze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillgap_core::{Difficulty, ProficiencyLevel, RiskTier, Skill, SkillCategory};

    fn skill(name: &str) -> Skill {
        Skill::new(name, SkillCategory::Backend, Difficulty::Intermediate)
    }

    #[test]
    fn test_all_four_classifications() {
        let python = skill("Python");
        let django = skill("Django");
        let sql = skill("SQL");
        let docker = skill("Docker");

        let have = vec![
            CompetencyEntry::new(python.clone(), ProficiencyLevel::Expert).verified(),
            CompetencyEntry::new(django.clone(), ProficiencyLevel::Basic),
            CompetencyEntry::new(docker.clone(), ProficiencyLevel::Intermediate),
        ];
        let need = vec![
            RequirementEntry::new(python.clone(), ProficiencyLevel::Intermediate),
            RequirementEntry::new(django.clone(), ProficiencyLevel::Intermediate),
            RequirementEntry::new(sql.clone(), ProficiencyLevel::Basic).optional(),
        ];

        let result = analyze(&have, &need);
        assert_eq!(result.counts.matched, 1);
        assert_eq!(result.counts.partial, 1);
        assert_eq!(result.counts.gap, 1);
        assert_eq!(result.counts.extra, 1);
        assert_eq!(result.counts.total_required, 3);

        assert_eq!(result.matched[0].skill.id, python.id);
        assert_eq!(result.matched[0].verified, Some(true));
        assert_eq!(
            result.partial[0].recommendation.as_deref(),
            Some("Upgrade Django from Basic to Intermediate")
        );
        assert_eq!(result.gaps[0].skill.id, sql.id);
        assert_eq!(result.gaps[0].mandatory, Some(false));
        assert_eq!(result.gaps[0].recommendation.as_deref(), Some("Learn SQL from scratch"));
        assert_eq!(result.extras[0].skill.id, docker.id);
        assert_eq!(result.extras[0].status, SkillStatus::Extra);
    }

    #[test]
    fn test_duplicate_requirement_last_write_wins() {
        let rust = skill("Rust");
        let have = vec![CompetencyEntry::new(rust.clone(), ProficiencyLevel::Intermediate)];
        let need = vec![
            RequirementEntry::new(rust.clone(), ProficiencyLevel::Basic),
            RequirementEntry::new(rust.clone(), ProficiencyLevel::Expert),
        ];

        let result = analyze(&have, &need);
        assert_eq!(result.counts.total_required, 1);
        assert_eq!(result.counts.partial, 1);
        assert_eq!(result.partial[0].required, Some(ProficiencyLevel::Expert));
    }

    #[test]
    fn test_duplicate_competency_last_write_wins() {
        let rust = skill("Rust");
        let go = skill("Go");
        let have = vec![
            CompetencyEntry::new(rust.clone(), ProficiencyLevel::Expert),
            CompetencyEntry::new(go.clone(), ProficiencyLevel::Basic),
            CompetencyEntry::new(rust.clone(), ProficiencyLevel::Basic),
            CompetencyEntry::new(go.clone(), ProficiencyLevel::Expert),
        ];
        let need = vec![RequirementEntry::new(rust.clone(), ProficiencyLevel::Intermediate)];

        let result = analyze(&have, &need);
        assert_eq!(result.counts.partial, 1);
        assert_eq!(result.counts.extra, 1);
        assert_eq!(result.extras[0].current, Some(ProficiencyLevel::Expert));
    }

    #[test]
    fn test_no_requirements_everything_extra() {
        let have = vec![CompetencyEntry::new(skill("Rust"), ProficiencyLevel::Basic)];
        let result = analyze(&have, &[]);
        assert_eq!(result.readiness, 100.0);
        assert_eq!(result.risk, RiskTier::Low);
        assert_eq!(result.counts.extra, 1);
        assert!(result.recommendations.is_empty());
        assert!(result.is_fully_ready());
    }

    #[test]
    fn test_output_follows_requirement_order() {
        let names = ["A", "B", "C", "D", "E", "F"];
        let need: Vec<_> = names
            .iter()
            .map(|n| RequirementEntry::new(skill(n), ProficiencyLevel::Basic))
            .collect();

        let result = analyze(&[], &need);
        let order: Vec<_> = result.gaps.iter().map(|g| g.skill.name.as_str()).collect();
        assert_eq!(order, names);
    }

    #[test]
    fn test_risk_description_matches_tier() {
        let result = analyze(&[], &[RequirementEntry::new(skill("Go"), ProficiencyLevel::Basic)]);
        assert_eq!(result.risk, RiskTier::Critical);
        assert_eq!(result.risk_description, RiskTier::Critical.description());
        assert!(result.summary.contains(RiskTier::Critical.description()));
    }
}
