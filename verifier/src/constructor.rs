//! Verifier for constructor-shape constraints.

use crate::{Verifier, VerifierResult, VerifyContext};
use edict_core::{messages, DiagnosticSink, Severity};
use edict_model::{has_constructor, ConstructorSignature};

/// Checks that the target declares the constructors its marker requires.
///
/// The no-arg and exact-signature requirements share one algorithm
/// parameterized by the expected signature; each requirement present on the
/// marker is checked and reported independently. Constructor diagnostics
/// label the triggering annotation with its full canonical name.
pub struct ConstructorVerifier;

impl Verifier for ConstructorVerifier {
    fn verify(&self, cx: &VerifyContext<'_>, sink: &mut dyn DiagnosticSink) -> VerifierResult<()> {
        if cx.constraints.requires_no_arg_constructor() {
            check(cx, sink, &ConstructorSignature::no_args());
        }
        if let Some(signature) = cx.constraints.required_constructor() {
            check(cx, sink, signature);
        }
        Ok(())
    }
}

fn check(cx: &VerifyContext<'_>, sink: &mut dyn DiagnosticSink, expected: &ConstructorSignature) {
    if has_constructor(cx.target, expected) {
        return;
    }

    let tail = if expected.is_no_arg() {
        messages::MSG_NO_ARG_CONSTRUCTOR.to_string()
    } else {
        format!(
            "{}{}{}",
            messages::MSG_CONSTRUCTOR_WITH_ARGS,
            expected.display_params(),
            messages::MSG_CONSTRUCTOR_ARGS_END
        )
    };
    cx.raise_with_label(
        sink,
        Severity::Error,
        cx.trigger.annotation.as_str(),
        &tail,
    );
}
