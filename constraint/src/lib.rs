//! EDICT Constraint Metadata
//!
//! Declarative constraint descriptors and their resolution. Constraints are
//! declared as meta-annotations on marker annotation types and consumed
//! structurally; there is no external configuration format.
//!
//! Responsibilities:
//! - The well-known constraint meta-annotation vocabulary
//! - Typed constraint descriptors (Constraints, ConstraintKind)
//! - Resolving a marker type's metadata into descriptors
//! - Surfacing malformed metadata loudly instead of skipping rules

mod constraints;
mod error;
mod resolve;

pub mod meta;

pub use constraints::{ConstraintKind, Constraints};
pub use error::{ConstraintError, ConstraintResult};
pub use resolve::resolve;
