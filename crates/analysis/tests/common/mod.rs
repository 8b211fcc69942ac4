//! Shared fixtures for analysis tests.

#![allow(dead_code)]

use skillgap_core::{
    CompetencyEntry, Difficulty, ProficiencyLevel, RequirementEntry, Skill, SkillCategory,
};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn skill(name: &str, category: SkillCategory) -> Skill {
    Skill::new(name, category, Difficulty::Intermediate)
}

pub fn have(skill: &Skill, level: ProficiencyLevel) -> CompetencyEntry {
    CompetencyEntry::new(skill.clone(), level)
}

pub fn need(skill: &Skill, level: ProficiencyLevel) -> RequirementEntry {
    RequirementEntry::new(skill.clone(), level)
}
