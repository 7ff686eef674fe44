//! Declaration structures.
//!
//! Declarations are immutable views over host-supplied compile data. The
//! verification engine reads them and never mutates them; they are valid for
//! the duration of one discovery event.

use edict_core::TypeName;

/// The kind of a declared program element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A concrete or abstract class.
    Class,
    /// An interface.
    Interface,
    /// An annotation type.
    AnnotationType,
}

/// Argument payload carried by an annotation use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationArg {
    /// An array-of-types argument.
    Types(Vec<TypeName>),
    /// An ordered constructor parameter-type list.
    Signature(Vec<TypeName>),
}

/// A use of an annotation type, with its argument values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationUse {
    /// Canonical name of the annotation type.
    pub annotation: TypeName,
    /// Argument values, in declaration order.
    pub args: Vec<AnnotationArg>,
}

impl AnnotationUse {
    /// An annotation use with no arguments.
    pub fn marker(annotation: impl Into<TypeName>) -> Self {
        Self {
            annotation: annotation.into(),
            args: Vec::new(),
        }
    }

    /// An annotation use with a single array-of-types argument.
    pub fn with_types<I, T>(annotation: impl Into<TypeName>, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        Self {
            annotation: annotation.into(),
            args: vec![AnnotationArg::Types(
                types.into_iter().map(Into::into).collect(),
            )],
        }
    }

    /// An annotation use with a single parameter-signature argument.
    pub fn with_signature<I, T>(annotation: impl Into<TypeName>, params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        Self {
            annotation: annotation.into(),
            args: vec![AnnotationArg::Signature(
                params.into_iter().map(Into::into).collect(),
            )],
        }
    }
}

/// Ordered parameter-type list of a declared constructor.
///
/// The empty signature is the no-arg constructor. Two signatures match iff
/// they have the same arity and the same canonical parameter names in order;
/// there is no boxing or widening equivalence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstructorSignature {
    params: Vec<TypeName>,
}

impl ConstructorSignature {
    /// Create a signature from an ordered parameter list.
    pub fn new<I, T>(params: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// The no-arg constructor signature.
    pub fn no_args() -> Self {
        Self::default()
    }

    /// The ordered parameter types.
    pub fn params(&self) -> &[TypeName] {
        &self.params
    }

    /// True for the empty parameter list.
    pub fn is_no_arg(&self) -> bool {
        self.params.is_empty()
    }

    /// Comma-space-joined canonical parameter names, as printed in diagnostics.
    pub fn display_params(&self) -> String {
        self.params
            .iter()
            .map(TypeName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A declared program element.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Canonical name.
    pub name: TypeName,
    /// What kind of element this is.
    pub kind: DeclarationKind,
    /// Annotations attached to this declaration.
    pub annotations: Vec<AnnotationUse>,
    /// Declared constructor signatures.
    pub constructors: Vec<ConstructorSignature>,
    /// Direct supertypes (extends and implements edges).
    pub supertypes: Vec<TypeName>,
}

impl Declaration {
    /// Check whether an annotation with the given canonical name is attached.
    pub fn has_annotation(&self, annotation: &TypeName) -> bool {
        self.annotations.iter().any(|a| a.annotation == *annotation)
    }

    /// Get the attached use of an annotation by canonical name.
    pub fn annotation(&self, annotation: &TypeName) -> Option<&AnnotationUse> {
        self.annotations.iter().find(|a| a.annotation == *annotation)
    }
}
