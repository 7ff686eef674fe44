//! Shape queries over declarations.
//!
//! Stateless helpers used by every verifier. Derived entirely from the
//! [`Introspect`] lookup, so they work against any host model.

use crate::{ConstructorSignature, Declaration, Introspect};
use edict_core::TypeName;
use std::collections::{HashSet, VecDeque};

/// Full transitive supertype closure of a declaration.
///
/// Breadth-first from the declaration outward: direct supertypes first, then
/// their ancestors, deduplicated. The declaration itself is not included.
/// Names with no backing declaration in the model terminate the walk as
/// leaves, and cycles are tolerated (each name is visited once). Consumers
/// only rely on presence, not on the exact order.
pub fn supertype_closure(model: &dyn Introspect, declaration: &Declaration) -> Vec<TypeName> {
    let mut closure = Vec::new();
    let mut seen: HashSet<TypeName> = HashSet::new();
    seen.insert(declaration.name.clone());

    let mut queue: VecDeque<TypeName> = declaration.supertypes.iter().cloned().collect();
    while let Some(name) = queue.pop_front() {
        if !seen.insert(name.clone()) {
            continue;
        }
        if let Some(supertype) = model.declaration(&name) {
            queue.extend(supertype.supertypes.iter().cloned());
        }
        closure.push(name);
    }

    closure
}

/// Check whether the declaration declares a constructor with exactly the
/// expected signature (arity and canonical parameter names, in order).
pub fn has_constructor(declaration: &Declaration, expected: &ConstructorSignature) -> bool {
    declaration.constructors.iter().any(|c| c == expected)
}
