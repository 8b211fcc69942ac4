//! Prioritized recommendation groups.

use skillgap_core::{ClassifiedSkill, RecommendationGroup, RecommendationKind};

/// Group gaps and partial matches into prioritized recommendations.
///
/// Order: mandatory gaps, optional gaps, proficiency upgrades. Empty groups
/// are left out.
pub fn build_recommendations(
    gaps: &[ClassifiedSkill],
    partials: &[ClassifiedSkill],
) -> Vec<RecommendationGroup> {
    let (mandatory, optional): (Vec<_>, Vec<_>) =
        gaps.iter().cloned().partition(|g| g.is_mandatory());

    [
        (RecommendationKind::MandatoryGaps, mandatory),
        (RecommendationKind::OptionalGaps, optional),
        (RecommendationKind::ProficiencyUpgrades, partials.to_vec()),
    ]
    .into_iter()
    .filter(|(_, skills)| !skills.is_empty())
    .map(|(kind, skills)| group(kind, skills))
    .collect()
}

fn group(kind: RecommendationKind, skills: Vec<ClassifiedSkill>) -> RecommendationGroup {
    let n = skills.len();
    let (title, description) = match kind {
        RecommendationKind::MandatoryGaps => (
            format!("CRITICAL: Learn {} Mandatory Skills", n),
            "These are must-have skills for this role",
        ),
        RecommendationKind::OptionalGaps => (
            format!("IMPORTANT: Learn {} Nice-to-Have Skills", n),
            "These are nice-to-have skills that will boost your chances",
        ),
        RecommendationKind::ProficiencyUpgrades => (
            format!("IMPROVE: Strengthen {} Skills", n),
            "These are skills to strengthen: you have them but need a higher proficiency",
        ),
    };

    RecommendationGroup {
        priority: kind.priority(),
        kind,
        title,
        description: description.to_string(),
        skills,
    }
}
