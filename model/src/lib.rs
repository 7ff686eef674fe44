//! EDICT Model
//!
//! Immutable views over host-supplied compile data, and the introspection
//! seam the verification engine depends on.
//!
//! Responsibilities:
//! - Declaration, annotation-use and constructor-signature structures
//! - The Introspect capability trait and the in-memory Model
//! - ModelBuilder with build-time validation
//! - Shape queries (supertype closure, constructor lookup)

mod builder;
mod declaration;
mod model;
mod shape;

pub use builder::{DeclarationBuilder, ModelBuilder, ModelError};
pub use declaration::*;
pub use model::{Introspect, Model};
pub use shape::{has_constructor, supertype_closure};
