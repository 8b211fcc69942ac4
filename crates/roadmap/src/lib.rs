//! Learning roadmaps - catalog lookup, pacing, and weekly schedules.
//!
//! Turns the gaps of an [`AnalysisResult`](skillgap_core::AnalysisResult)
//! into a week-by-week plan, with optional learning resources per gap.

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod planner;
pub mod resources;

pub use catalog::{CatalogEntry, CatalogLookup, InMemoryCatalog, LearningResource, ResourceType};
pub use config::{RoadmapConfig, TieBreak};
pub use planner::{RoadmapPlan, RoadmapPlanner, RoadmapWeek, roadmap};
pub use resources::{GapResources, DEFAULT_RESOURCE_LIMIT, gap_resources};
