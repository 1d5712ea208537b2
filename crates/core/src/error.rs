//! Error types for the recommendation platform
//!
//! Failures that reach a caller are typed so the UI layer can choose
//! per-kind messaging instead of collapsing everything into one generic
//! error screen.

use thiserror::Error;

/// Convenience alias used across the platform crates.
pub type Result<T> = std::result::Result<T, RecsError>;

/// Platform-wide error taxonomy.
#[derive(Debug, Error)]
pub enum RecsError {
    /// A favorite title does not exist (exact match) within the working
    /// subset. Surfaced per missing title, never swallowed into an empty
    /// result list.
    #[error("title not found in working subset: {title:?}")]
    TitleNotFound { title: String },

    /// No eligible (non-seed) candidates remain after exclusion. A pool
    /// that is merely smaller than the requested count is returned whole
    /// instead of raising this.
    #[error("insufficient candidates: requested {requested}, available {available}")]
    InsufficientCandidates { requested: usize, available: usize },

    /// Source data is unusable, e.g. every movie row was malformed.
    /// Individual bad rows are dropped with a warning and do not raise.
    #[error("data integrity error: {0}")]
    DataIntegrity(String),

    /// Invalid or unparsable configuration values.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The caller supplied an unusable request (wrong number of favorite
    /// titles, zero result count).
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RecsError {
    pub fn data_integrity(msg: impl Into<String>) -> Self {
        RecsError::DataIntegrity(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        RecsError::Configuration(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        RecsError::InvalidRequest(msg.into())
    }
}
