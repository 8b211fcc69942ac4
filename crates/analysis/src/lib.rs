//! Competency analysis - comparison, readiness scoring, and recommendations.
//!
//! ```text
//! index inputs → classify skills → score readiness → group recommendations
//! ```

#![warn(missing_docs)]

pub mod comparator;
pub mod scorer;
pub mod recommendation;
pub mod summary;

pub use comparator::{CompetencyComparator, analyze};
pub use scorer::{Readiness, RISK_THRESHOLDS, score, round2, risk_tier};
pub use recommendation::build_recommendations;
pub use summary::summarize;
