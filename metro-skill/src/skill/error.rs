//! Skill error types.

/// Errors that abort request handling.
///
/// User-input problems (unknown station, empty boards, upstream trouble)
/// are answered with speech and never surface here. An intent name outside
/// the configured set is different: it means the interaction model and the
/// handler disagree, so the request is reported as failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkillError {
    /// Intent name not in the recognized set
    #[error("unrecognized intent: {0}")]
    UnknownIntent(String),
}
