//! Resolving constraint metadata from marker annotation types.

use crate::error::{ConstraintError, ConstraintResult};
use crate::{meta, Constraints};
use edict_core::TypeName;
use edict_model::{AnnotationArg, AnnotationUse, ConstructorSignature, Declaration};
use std::collections::HashSet;

/// Resolve the constraints declared on a marker annotation type.
///
/// For each known constraint kind, looks for the corresponding
/// meta-annotation among the marker's own attached annotations. An absent
/// meta-annotation leaves that kind absent in the result - most markers
/// carry zero or one kind. The result depends only on the marker's static
/// metadata; the call has no side effects and is safe to repeat.
pub fn resolve(marker: &Declaration) -> ConstraintResult<Constraints> {
    let mut constraints = Constraints::empty();

    if let Some(required) = marker.annotation(&TypeName::new(meta::REQUIRE_ANNOTATIONS)) {
        constraints.required_annotations = Some(decode_type_list(required)?);
    }
    if let Some(recommended) = marker.annotation(&TypeName::new(meta::RECOMMEND_ANNOTATIONS)) {
        constraints.recommended_annotations = Some(decode_type_list(recommended)?);
    }
    if let Some(supertypes) = marker.annotation(&TypeName::new(meta::REQUIRE_SUPERTYPES)) {
        constraints.required_supertypes = Some(decode_type_list(supertypes)?);
    }
    if let Some(no_arg) = marker.annotation(&TypeName::new(meta::REQUIRE_NO_ARG_CONSTRUCTOR)) {
        if !no_arg.args.is_empty() {
            return Err(ConstraintError::malformed(
                no_arg.annotation.as_str(),
                "expected no arguments",
            ));
        }
        constraints.require_no_arg_constructor = true;
    }
    if let Some(constructor) = marker.annotation(&TypeName::new(meta::REQUIRE_CONSTRUCTOR)) {
        constraints.required_constructor =
            Some(ConstructorSignature::new(decode_signature(constructor)?));
    }

    Ok(constraints)
}

/// Decode the single array-of-types argument of a list constraint.
///
/// Duplicate entries collapse to one requirement; the first occurrence keeps
/// its position.
fn decode_type_list(annotation: &AnnotationUse) -> ConstraintResult<Vec<TypeName>> {
    match annotation.args.as_slice() {
        [AnnotationArg::Types(types)] => Ok(dedup(types)),
        [] => Err(ConstraintError::malformed(
            annotation.annotation.as_str(),
            "expected an array-of-types argument, found none",
        )),
        [_] => Err(ConstraintError::malformed(
            annotation.annotation.as_str(),
            "expected an array-of-types argument, found a signature",
        )),
        _ => Err(ConstraintError::malformed(
            annotation.annotation.as_str(),
            "expected exactly one argument",
        )),
    }
}

/// Decode the single signature argument of the constructor-shape constraint.
/// An empty signature is valid and means the no-arg constructor.
fn decode_signature(annotation: &AnnotationUse) -> ConstraintResult<Vec<TypeName>> {
    match annotation.args.as_slice() {
        [AnnotationArg::Signature(params)] => Ok(params.clone()),
        [] => Err(ConstraintError::malformed(
            annotation.annotation.as_str(),
            "expected a signature argument, found none",
        )),
        [_] => Err(ConstraintError::malformed(
            annotation.annotation.as_str(),
            "expected a signature argument, found an array of types",
        )),
        _ => Err(ConstraintError::malformed(
            annotation.annotation.as_str(),
            "expected exactly one argument",
        )),
    }
}

fn dedup(types: &[TypeName]) -> Vec<TypeName> {
    let mut seen = HashSet::new();
    types
        .iter()
        .filter(|t| seen.insert((*t).clone()))
        .cloned()
        .collect()
}
