//! Canonical type identifiers.

use std::fmt;

/// Canonical name of a type (class, interface or annotation type).
///
/// Canonical names are the comparison key for every constraint check: two
/// types are equal iff their canonical names match exactly. There is no
/// structural or assignability matching.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name from its canonical form.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The canonical name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final `.`-separated segment of the canonical name.
    ///
    /// Used as the short display label for annotations in diagnostics.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
