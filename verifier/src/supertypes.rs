//! Verifier for required supertypes.

use crate::{Verifier, VerifierResult, VerifyContext};
use edict_core::{messages, DiagnosticSink, Severity, TypeName};
use edict_model::supertype_closure;

/// Checks that the target's supertype closure contains every supertype its
/// marker requires.
pub struct RequireSupertypesVerifier;

impl Verifier for RequireSupertypesVerifier {
    fn verify(&self, cx: &VerifyContext<'_>, sink: &mut dyn DiagnosticSink) -> VerifierResult<()> {
        let Some(required) = cx.constraints.required_supertypes() else {
            return Ok(());
        };
        if required.is_empty() {
            return Ok(());
        }

        let mut missing: Vec<&TypeName> = required.iter().collect();
        for supertype in supertype_closure(cx.model, cx.target) {
            missing.retain(|name| **name != supertype);
        }

        for name in missing {
            cx.raise(
                sink,
                Severity::Error,
                &format!(
                    "{}{}{}",
                    messages::MSG_BUT_DOES_NOT_HAVE,
                    name,
                    messages::MSG_AS_A_SUPERTYPE
                ),
            );
        }

        Ok(())
    }
}
