//! The verifier contract and per-call context.

use crate::VerifierResult;
use edict_constraint::Constraints;
use edict_core::{messages, Diagnostic, DiagnosticSink, Severity};
use edict_model::{AnnotationUse, Declaration, Introspect};

/// Context for one verification call.
///
/// Everything a verifier may consult is passed here by parameter: the host
/// model view, the target declaration, the triggering annotation use and the
/// resolved constraint descriptors. There is no ambient state.
pub struct VerifyContext<'a> {
    /// Introspection over host-supplied compile data.
    pub model: &'a dyn Introspect,
    /// The annotated declaration under verification.
    pub target: &'a Declaration,
    /// The marker annotation use that triggered this check.
    pub trigger: &'a AnnotationUse,
    /// Constraints resolved from the marker annotation type.
    pub constraints: &'a Constraints,
}

impl VerifyContext<'_> {
    /// Report a finding about the target, labeling the triggering annotation
    /// with its simple name.
    pub(crate) fn raise(&self, sink: &mut dyn DiagnosticSink, severity: Severity, tail: &str) {
        self.raise_with_label(
            sink,
            severity,
            self.trigger.annotation.simple_name(),
            tail,
        );
    }

    /// Report a finding about the target with an explicit annotation label.
    pub(crate) fn raise_with_label(
        &self,
        sink: &mut dyn DiagnosticSink,
        severity: Severity,
        label: &str,
        tail: &str,
    ) {
        let message = format!(
            "{}{}{}{}{}",
            messages::MSG_CLASS,
            self.target.name,
            messages::MSG_IS_ANNOTATED_WITH,
            label,
            tail,
        );
        sink.report(Diagnostic::new(
            severity,
            message,
            self.target.name.clone(),
            self.trigger.annotation.clone(),
        ));
    }
}

/// A rule evaluator for one or more constraint kinds.
///
/// Verifiers inspect the target's static shape and report findings through
/// the sink: zero reports is a pass. An unsatisfied constraint is the
/// expected, reportable outcome, never an `Err`; errors are reserved for
/// malformed host input.
pub trait Verifier {
    /// Check the target against the resolved constraints.
    fn verify(&self, cx: &VerifyContext<'_>, sink: &mut dyn DiagnosticSink) -> VerifierResult<()>;
}
