//! The well-known constraint meta-annotation vocabulary.
//!
//! A marker annotation type activates a constraint kind by carrying one of
//! these annotations on its own declaration. The names are matched exactly
//! against the canonical annotation name.

/// Companion annotations that MUST be present on the annotated declaration.
/// Carries one array-of-types argument.
pub const REQUIRE_ANNOTATIONS: &str = "constraint.RequireAnnotations";

/// Companion annotations that SHOULD be present on the annotated declaration.
/// Carries one array-of-types argument.
pub const RECOMMEND_ANNOTATIONS: &str = "constraint.RecommendAnnotations";

/// Supertypes the annotated declaration must have in its closure.
/// Carries one array-of-types argument.
pub const REQUIRE_SUPERTYPES: &str = "constraint.RequireSupertypes";

/// The annotated declaration must declare a no-arg constructor.
/// Carries no arguments.
pub const REQUIRE_NO_ARG_CONSTRUCTOR: &str = "constraint.RequireNoArgConstructor";

/// The annotated declaration must declare a constructor with an exact
/// parameter signature. Carries one signature argument.
pub const REQUIRE_CONSTRUCTOR: &str = "constraint.RequireConstructor";
