//! Shared diagnostic message fragments.
//!
//! These constants keep the reported message format identical across
//! verifiers. Dependent tooling matches on the assembled messages verbatim.

/// Prefix: names the annotated declaration.
pub const MSG_CLASS: &str = "Class ";

/// Connects the declaration to the triggering annotation label.
pub const MSG_IS_ANNOTATED_WITH: &str = " is annotated with @";

/// Tail: a required or recommended companion annotation is missing.
pub const MSG_BUT_NOT_WITH: &str = " but not with @";

/// Tail opening: a required supertype is missing.
pub const MSG_BUT_DOES_NOT_HAVE: &str = " but does not have ";

/// Tail closing: a required supertype is missing.
pub const MSG_AS_A_SUPERTYPE: &str = " as a supertype";

/// Tail: no constructor with an empty parameter list.
pub const MSG_NO_ARG_CONSTRUCTOR: &str = " but does not have a constructor with no arguments";

/// Tail opening: no constructor with the required parameter list.
pub const MSG_CONSTRUCTOR_WITH_ARGS: &str = " but does not have a constructor with arguments (";

/// Tail closing: no constructor with the required parameter list.
pub const MSG_CONSTRUCTOR_ARGS_END: &str = ")";
