//! Skill catalog lookup.
//!
//! The roadmap needs a little reference data per skill (difficulty and
//! learning hours). It is supplied by whoever owns the catalog, through the
//! [`CatalogLookup`] capability.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skillgap_core::{Difficulty, Skill, SkillId};

/// Catalog data the roadmap needs for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// How hard the skill is to learn
    pub difficulty: Difficulty,

    /// Estimated hours to learn the skill
    pub estimated_hours: u32,
}

/// Read access to catalog metadata.
///
/// Lookups never fail: a skill the catalog does not know is `None`.
pub trait CatalogLookup: Send + Sync {
    /// Difficulty and learning hours for a skill.
    fn lookup(&self, skill_id: &SkillId) -> Option<CatalogEntry>;

    /// Learning resources for a skill.
    fn resources(&self, _skill_id: &SkillId) -> Vec<LearningResource> {
        Vec::new()
    }
}

/// Material for learning a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningResource {
    /// Skill taught
    pub skill_id: SkillId,

    /// Resource title
    pub title: String,

    /// Kind of material
    pub resource_type: ResourceType,

    /// Where to find it
    pub url: String,

    /// Recommended difficulty level
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Estimated time to complete (hours)
    pub estimated_hours: u32,

    /// Free (true) or paid (false)
    #[serde(default = "default_free")]
    pub is_free: bool,
}

fn default_free() -> bool {
    true
}

/// Kind of learning material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// Recorded talk or screencast
    Video,
    /// Blog post or written guide
    Article,
    /// Structured course
    Course,
    /// Official reference documentation
    Documentation,
    /// Book
    Book,
    /// Hands-on tutorial
    Tutorial,
    /// Anything else
    Other,
}

/// Catalog held in memory.
///
/// A skill's estimated hours are the sum over all of its resources, capped
/// at `u32::MAX`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    skills: HashMap<SkillId, Skill>,
    resources: Vec<LearningResource>,
}

/// On-disk layout of a catalog document.
#[derive(Deserialize)]
struct CatalogDocument {
    skills: Vec<Skill>,
    #[serde(default)]
    resources: Vec<LearningResource>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a skill. Re-adding an id replaces the earlier skill.
    pub fn add_skill(&mut self, skill: Skill) {
        self.skills.insert(skill.id, skill);
    }

    /// Add a learning resource.
    pub fn add_resource(&mut self, resource: LearningResource) {
        self.resources.push(resource);
    }

    /// Look up a skill.
    pub fn skill(&self, skill_id: &SkillId) -> Option<&Skill> {
        self.skills.get(skill_id)
    }

    /// Number of skills.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the catalog has no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Parse a catalog from JSON: `{"skills": [...], "resources": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;

        let mut catalog = Self::new();
        for skill in doc.skills {
            catalog.add_skill(skill);
        }
        for resource in doc.resources {
            catalog.add_resource(resource);
        }

        tracing::debug!(
            "Loaded catalog with {} skills and {} resources",
            catalog.skills.len(),
            catalog.resources.len()
        );
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid catalog file {}", path.display()))
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn lookup(&self, skill_id: &SkillId) -> Option<CatalogEntry> {
        let skill = self.skills.get(skill_id)?;
        let estimated_hours = self
            .resources
            .iter()
            .filter(|r| r.skill_id == *skill_id)
            .fold(0u32, |total, r| total.saturating_add(r.estimated_hours));

        Some(CatalogEntry {
            difficulty: skill.difficulty,
            estimated_hours,
        })
    }

    fn resources(&self, skill_id: &SkillId) -> Vec<LearningResource> {
        self.resources
            .iter()
            .filter(|r| r.skill_id == *skill_id)
            .cloned()
            .collect()
    }
}

impl CatalogLookup for HashMap<SkillId, CatalogEntry> {
    fn lookup(&self, skill_id: &SkillId) -> Option<CatalogEntry> {
        self.get(skill_id).copied()
    }
}
