//! Learning resources for skill gaps.

use serde::{Deserialize, Serialize};
use skillgap_core::{AnalysisResult, ProficiencyLevel, Skill};

use crate::catalog::{CatalogLookup, LearningResource};

/// Resources shown per gap unless the caller asks otherwise.
pub const DEFAULT_RESOURCE_LIMIT: usize = 5;

/// Suggested material for one gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapResources {
    /// The missing skill
    pub skill: Skill,

    /// Whether the role requires the skill
    pub mandatory: bool,

    /// Level the role asks for
    pub required: Option<ProficiencyLevel>,

    /// Up to `limit` free resources, easiest first
    pub resources: Vec<LearningResource>,
}

/// Collect learning resources for every gap of `result`.
///
/// Only free resources are listed, ordered by difficulty. Resources of equal
/// difficulty keep the catalog's order.
pub fn gap_resources<C>(result: &AnalysisResult, catalog: &C, limit: usize) -> Vec<GapResources>
where
    C: CatalogLookup + ?Sized,
{
    result
        .gaps
        .iter()
        .map(|gap| {
            let mut resources: Vec<LearningResource> = catalog
                .resources(&gap.skill.id)
                .into_iter()
                .filter(|r| r.is_free)
                .collect();
            resources.sort_by_key(|r| r.difficulty);
            resources.truncate(limit);
            GapResources {
                skill: gap.skill.clone(),
                mandatory: gap.is_mandatory(),
                required: gap.required,
                resources,
            }
        })
        .collect()
}
