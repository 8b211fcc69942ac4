//! Error type for input validation.

/// Result alias for SkillGap operations.
pub type Result<T> = std::result::Result<T, SkillGapError>;

/// Errors raised while constructing analysis inputs.
///
/// The engine itself never fails: duplicate skills, empty requirement sets
/// and missing catalog data all have defined outcomes. Only values that
/// cannot be represented are rejected, at the boundary where they enter.
#[derive(Debug, thiserror::Error)]
pub enum SkillGapError {
    /// Proficiency outside Basic/Intermediate/Expert
    #[error("Invalid proficiency level: {0}")]
    InvalidProficiency(String),

    /// Difficulty outside Beginner/Intermediate/Advanced
    #[error("Invalid difficulty level: {0}")]
    InvalidDifficulty(String),

    /// Skill id text that is not a valid ULID
    #[error("Invalid skill id: {0}")]
    InvalidSkillId(#[from] ulid::DecodeError),
}
