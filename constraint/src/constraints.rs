//! Resolved constraint descriptors.

use edict_core::TypeName;
use edict_model::ConstructorSignature;

/// One constraint rule category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConstraintKind {
    /// Companion annotations that must be present.
    RequiredAnnotations,
    /// Companion annotations that should be present.
    RecommendedAnnotations,
    /// Supertypes that must appear in the target's closure.
    RequiredSupertypes,
    /// A no-arg constructor must be declared.
    RequiredNoArgConstructor,
    /// A constructor with an exact signature must be declared.
    RequiredConstructorShape,
}

/// The resolved constraint descriptors of one marker annotation type.
///
/// Derived fresh per verification call from the marker's own attached
/// annotations - a pure function of that static metadata, with no caching
/// and no ordering dependency across annotated declarations.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub(crate) required_annotations: Option<Vec<TypeName>>,
    pub(crate) recommended_annotations: Option<Vec<TypeName>>,
    pub(crate) required_supertypes: Option<Vec<TypeName>>,
    pub(crate) require_no_arg_constructor: bool,
    pub(crate) required_constructor: Option<ConstructorSignature>,
}

impl Constraints {
    /// The empty descriptor set: no constraint kinds present.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a required-annotations descriptor.
    pub fn with_required_annotations<I, T>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.required_annotations = Some(annotations.into_iter().map(Into::into).collect());
        self
    }

    /// Add a recommended-annotations descriptor.
    pub fn with_recommended_annotations<I, T>(mut self, annotations: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.recommended_annotations = Some(annotations.into_iter().map(Into::into).collect());
        self
    }

    /// Add a required-supertypes descriptor.
    pub fn with_required_supertypes<I, T>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        self.required_supertypes = Some(supertypes.into_iter().map(Into::into).collect());
        self
    }

    /// Require a no-arg constructor.
    pub fn with_no_arg_constructor(mut self) -> Self {
        self.require_no_arg_constructor = true;
        self
    }

    /// Require a constructor with an exact signature.
    pub fn with_required_constructor(mut self, signature: ConstructorSignature) -> Self {
        self.required_constructor = Some(signature);
        self
    }

    /// Check whether no constraint kind is present.
    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }

    /// The constraint kinds present on the marker, in a fixed order.
    pub fn kinds(&self) -> Vec<ConstraintKind> {
        let mut kinds = Vec::new();
        if self.required_annotations.is_some() {
            kinds.push(ConstraintKind::RequiredAnnotations);
        }
        if self.recommended_annotations.is_some() {
            kinds.push(ConstraintKind::RecommendedAnnotations);
        }
        if self.required_supertypes.is_some() {
            kinds.push(ConstraintKind::RequiredSupertypes);
        }
        if self.require_no_arg_constructor {
            kinds.push(ConstraintKind::RequiredNoArgConstructor);
        }
        if self.required_constructor.is_some() {
            kinds.push(ConstraintKind::RequiredConstructorShape);
        }
        kinds
    }

    /// Annotations the target must also carry, in declaration order.
    pub fn required_annotations(&self) -> Option<&[TypeName]> {
        self.required_annotations.as_deref()
    }

    /// Annotations the target should also carry, in declaration order.
    pub fn recommended_annotations(&self) -> Option<&[TypeName]> {
        self.recommended_annotations.as_deref()
    }

    /// Supertypes the target must have in its closure, in declaration order.
    pub fn required_supertypes(&self) -> Option<&[TypeName]> {
        self.required_supertypes.as_deref()
    }

    /// Whether the target must declare a no-arg constructor.
    pub fn requires_no_arg_constructor(&self) -> bool {
        self.require_no_arg_constructor
    }

    /// The exact constructor signature the target must declare.
    pub fn required_constructor(&self) -> Option<&ConstructorSignature> {
        self.required_constructor.as_ref()
    }
}
