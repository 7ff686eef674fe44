//! Verifier for required and recommended companion annotations.

use crate::{Verifier, VerifierResult, VerifyContext};
use edict_core::{messages, DiagnosticSink, Severity, TypeName};

/// Checks that the target also carries the annotations its marker requires
/// or recommends.
///
/// Required and recommended lists are checked with the same walk; a missing
/// required annotation is an error, a missing recommended one a warning.
/// Diagnostics follow descriptor declaration order, required before
/// recommended.
pub struct CompanionAnnotationsVerifier;

impl Verifier for CompanionAnnotationsVerifier {
    fn verify(&self, cx: &VerifyContext<'_>, sink: &mut dyn DiagnosticSink) -> VerifierResult<()> {
        let required = cx.constraints.required_annotations();
        let recommended = cx.constraints.recommended_annotations();
        if required.is_none() && recommended.is_none() {
            return Ok(());
        }

        let mut required: Vec<&TypeName> = required.unwrap_or_default().iter().collect();
        let mut recommended: Vec<&TypeName> = recommended.unwrap_or_default().iter().collect();

        for attached in &cx.target.annotations {
            required.retain(|name| **name != attached.annotation);
            recommended.retain(|name| **name != attached.annotation);
        }

        for missing in required {
            cx.raise(
                sink,
                Severity::Error,
                &format!("{}{}", messages::MSG_BUT_NOT_WITH, missing),
            );
        }
        for missing in recommended {
            cx.raise(
                sink,
                Severity::Warning,
                &format!("{}{}", messages::MSG_BUT_NOT_WITH, missing),
            );
        }

        Ok(())
    }
}
