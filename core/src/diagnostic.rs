//! Diagnostic types and the sink interface.

use crate::TypeName;

/// Severity of a reported finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A violated requirement - fails the check.
    Error,
    /// A missed recommendation - advisory only.
    Warning,
}

/// A reported finding about an annotated declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity of the finding.
    pub severity: Severity,
    /// Full human-readable message.
    pub message: String,
    /// Canonical name of the declaration the finding is about.
    pub target: TypeName,
    /// Canonical name of the marker annotation that triggered the check.
    pub trigger: TypeName,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        target: TypeName,
        trigger: TypeName,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            target,
            trigger,
        }
    }

    /// Create an error-level diagnostic.
    pub fn error(message: impl Into<String>, target: TypeName, trigger: TypeName) -> Self {
        Self::new(Severity::Error, message, target, trigger)
    }

    /// Create a warning-level diagnostic.
    pub fn warning(message: impl Into<String>, target: TypeName, trigger: TypeName) -> Self {
        Self::new(Severity::Warning, message, target, trigger)
    }

    /// Check if this is an error-level diagnostic.
    pub fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }

    /// Check if this is a warning-level diagnostic.
    pub fn is_warning(&self) -> bool {
        matches!(self.severity, Severity::Warning)
    }
}

/// Where verifiers report their findings.
///
/// The engine calls `report` once per finding and never retains diagnostics
/// after emission. Hosts bring their own implementation; [`Diagnostics`] is a
/// plain collecting sink for tests and single-pass drivers.
pub trait DiagnosticSink {
    /// Record one finding.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Check if there are any error-level diagnostics.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    /// Check if there are only warnings.
    pub fn has_only_warnings(&self) -> bool {
        !self.diagnostics.is_empty() && !self.has_errors()
    }

    /// Get all diagnostics in emission order.
    pub fn all(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get error-level diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    /// Get warning-level diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    /// Get the number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Merge another collection, preserving emission order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.diagnostics.extend(other.diagnostics);
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
