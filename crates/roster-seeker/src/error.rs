//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when building predicates.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// A text pattern could not be compiled (for example, it exceeds the
    /// regex engine's size limit).
    #[error("invalid match pattern for '{key}': {source}")]
    InvalidPattern {
        key: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
