//! Constraint metadata error types.

use thiserror::Error;

/// Result type for constraint metadata operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors raised while decoding constraint metadata.
///
/// Malformed metadata is a defect in constraint authoring. It fails the
/// current verification call; it is never silently skipped.
#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("Malformed constraint metadata on @{annotation}: {reason}")]
    MalformedMetadata { annotation: String, reason: String },
}

impl ConstraintError {
    pub fn malformed(annotation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            annotation: annotation.into(),
            reason: reason.into(),
        }
    }
}
