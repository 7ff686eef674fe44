//! The verifier registry.

use crate::{
    CompanionAnnotationsVerifier, ConstructorVerifier, RequireSupertypesVerifier, Verifier,
};
use edict_constraint::ConstraintKind;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Maps constraint kinds to verifier instances.
///
/// New kinds are wired in through [`VerifierRegistry::register`]; the
/// dispatcher never changes. One instance may serve several kinds (the
/// companion and constructor verifiers do) and still runs once per event.
/// Dispatch follows the fixed kind order.
pub struct VerifierRegistry {
    verifiers: BTreeMap<ConstraintKind, Arc<dyn Verifier>>,
}

impl VerifierRegistry {
    /// An empty registry with no verifiers installed.
    pub fn empty() -> Self {
        Self {
            verifiers: BTreeMap::new(),
        }
    }

    /// A registry with the built-in verifiers installed.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();

        let companion: Arc<dyn Verifier> = Arc::new(CompanionAnnotationsVerifier);
        registry.register(ConstraintKind::RequiredAnnotations, Arc::clone(&companion));
        registry.register(ConstraintKind::RecommendedAnnotations, companion);

        registry.register(
            ConstraintKind::RequiredSupertypes,
            Arc::new(RequireSupertypesVerifier),
        );

        let constructor: Arc<dyn Verifier> = Arc::new(ConstructorVerifier);
        registry.register(
            ConstraintKind::RequiredNoArgConstructor,
            Arc::clone(&constructor),
        );
        registry.register(ConstraintKind::RequiredConstructorShape, constructor);

        registry
    }

    /// Register a verifier for a constraint kind, replacing any existing
    /// mapping for that kind.
    pub fn register(&mut self, kind: ConstraintKind, verifier: Arc<dyn Verifier>) {
        self.verifiers.insert(kind, verifier);
    }

    /// The verifier registered for a kind.
    pub fn get(&self, kind: ConstraintKind) -> Option<&Arc<dyn Verifier>> {
        self.verifiers.get(&kind)
    }

    /// The verifiers serving the given kinds: each instance once, in kind
    /// order.
    pub(crate) fn for_kinds(&self, kinds: &[ConstraintKind]) -> Vec<Arc<dyn Verifier>> {
        let mut selected: Vec<Arc<dyn Verifier>> = Vec::new();
        for kind in kinds {
            if let Some(verifier) = self.verifiers.get(kind) {
                if !selected.iter().any(|v| Arc::ptr_eq(v, verifier)) {
                    selected.push(Arc::clone(verifier));
                }
            }
        }
        selected
    }
}

impl Default for VerifierRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
