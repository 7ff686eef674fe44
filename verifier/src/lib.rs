//! EDICT Verifier
//!
//! The constraint verification engine: rule evaluators driven by resolved
//! constraint metadata, a pluggable verifier registry, and the dispatcher
//! hosts call once per discovery event.
//!
//! Responsibilities:
//! - Evaluate each constraint kind against a target declaration's shape
//! - Report one diagnostic per missing or violated item
//! - Keep verification read-only; sink emission is the only side effect
//! - Dispatch independently per (declaration, annotation) event

mod companion;
mod constructor;
mod error;
mod processor;
mod registry;
mod supertypes;
mod verifier;

pub use companion::CompanionAnnotationsVerifier;
pub use constructor::ConstructorVerifier;
pub use error::{VerifierError, VerifierResult};
pub use processor::Processor;
pub use registry::VerifierRegistry;
pub use supertypes::RequireSupertypesVerifier;
pub use verifier::{Verifier, VerifyContext};
