//! The dispatcher: resolves constraints and invokes verifiers.

use crate::{VerifierRegistry, VerifierResult, VerifyContext};
use edict_constraint::{resolve, Constraints};
use edict_core::DiagnosticSink;
use edict_model::{AnnotationUse, Declaration, Introspect, Model};

/// The verification engine entry point.
///
/// One processor serves any number of declarations; every call reads only
/// host-supplied data and shares no state with other calls, so a host may
/// drive it from parallel discovery as long as its sink is safe.
pub struct Processor {
    registry: VerifierRegistry,
}

impl Processor {
    /// A processor with the built-in verifiers.
    pub fn new() -> Self {
        Self {
            registry: VerifierRegistry::with_defaults(),
        }
    }

    /// A processor with a custom verifier registry.
    pub fn with_registry(registry: VerifierRegistry) -> Self {
        Self { registry }
    }

    /// The registry, for registering additional verifiers.
    pub fn registry_mut(&mut self) -> &mut VerifierRegistry {
        &mut self.registry
    }

    /// Handle one discovery event: a declaration found annotated with a
    /// marker annotation.
    ///
    /// Resolves the constraints declared on the marker annotation type and
    /// invokes the verifier of every present kind with the same context.
    /// A marker with no declaration in the model carries no constraints, so
    /// the pass is clean. Distinct triggering annotations on the same
    /// declaration are independent events.
    pub fn on_annotated_declaration(
        &self,
        model: &dyn Introspect,
        target: &Declaration,
        trigger: &AnnotationUse,
        sink: &mut dyn DiagnosticSink,
    ) -> VerifierResult<()> {
        let constraints = match model.declaration(&trigger.annotation) {
            Some(marker) => resolve(marker)?,
            None => Constraints::empty(),
        };
        if constraints.is_empty() {
            return Ok(());
        }

        let cx = VerifyContext {
            model,
            target,
            trigger,
            constraints: &constraints,
        };
        for verifier in self.registry.for_kinds(&constraints.kinds()) {
            verifier.verify(&cx, sink)?;
        }

        Ok(())
    }

    /// Sweep a full in-memory model: one event per (declaration, attached
    /// annotation) pair, in canonical-name order.
    pub fn check_all(&self, model: &Model, sink: &mut dyn DiagnosticSink) -> VerifierResult<()> {
        for declaration in model.declarations() {
            for annotation in &declaration.annotations {
                self.on_annotated_declaration(model, declaration, annotation, sink)?;
            }
        }
        Ok(())
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}
