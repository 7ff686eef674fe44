//! Verifier error types.

use edict_constraint::ConstraintError;
use thiserror::Error;

/// Result type for verification operations.
pub type VerifierResult<T> = Result<T, VerifierError>;

/// Errors that abort a verification call.
///
/// An unsatisfied constraint is never an error - it is reported through the
/// diagnostic sink. These errors surface defects in host input, such as
/// malformed constraint metadata.
#[derive(Debug, Error)]
pub enum VerifierError {
    #[error(transparent)]
    Metadata(#[from] ConstraintError),
}
