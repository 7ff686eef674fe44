//! ModelBuilder for constructing an immutable Model.

use crate::{
    AnnotationUse, ConstructorSignature, Declaration, DeclarationKind, Model,
};
use edict_core::TypeName;
use regex_lite::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur during model construction.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Duplicate declaration: {0}")]
    DuplicateDeclaration(String),

    #[error("Invalid canonical type name: {0}")]
    InvalidTypeName(String),

    #[error("Declaration {0} lists itself as a supertype")]
    SelfInheritance(String),
}

/// Canonical names are dot-separated identifiers with optional `[]` suffixes.
fn type_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*(\[\])*$")
            .expect("type name pattern is valid")
    })
}

fn validate_type_name(name: &TypeName) -> Result<(), ModelError> {
    if type_name_pattern().is_match(name.as_str()) {
        Ok(())
    } else {
        Err(ModelError::InvalidTypeName(name.as_str().to_string()))
    }
}

/// Builder for constructing an immutable [`Model`].
#[derive(Debug, Default)]
pub struct ModelBuilder {
    declarations: Vec<Declaration>,
}

impl ModelBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a declaration. Finish it with [`DeclarationBuilder::done`].
    pub fn declare(
        &mut self,
        name: impl Into<TypeName>,
        kind: DeclarationKind,
    ) -> DeclarationBuilder<'_> {
        DeclarationBuilder {
            builder: self,
            name: name.into(),
            kind,
            annotations: Vec::new(),
            constructors: Vec::new(),
            supertypes: Vec::new(),
        }
    }

    /// Build the immutable Model.
    pub fn build(self) -> Result<Model, ModelError> {
        let mut declarations = BTreeMap::new();
        for declaration in self.declarations {
            let name = declaration.name.clone();
            if declarations.insert(name.clone(), declaration).is_some() {
                return Err(ModelError::DuplicateDeclaration(name.as_str().to_string()));
            }
        }
        Ok(Model::new(declarations))
    }
}

/// Builds one declaration inside a [`ModelBuilder`].
#[derive(Debug)]
pub struct DeclarationBuilder<'b> {
    builder: &'b mut ModelBuilder,
    name: TypeName,
    kind: DeclarationKind,
    annotations: Vec<AnnotationUse>,
    constructors: Vec<ConstructorSignature>,
    supertypes: Vec<TypeName>,
}

impl DeclarationBuilder<'_> {
    /// Attach an annotation use.
    pub fn annotate(mut self, annotation: AnnotationUse) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Declare a constructor signature.
    pub fn constructor(mut self, signature: ConstructorSignature) -> Self {
        self.constructors.push(signature);
        self
    }

    /// Add a direct supertype edge (extends or implements).
    pub fn extends(mut self, supertype: impl Into<TypeName>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    /// Validate and add the declaration to the builder.
    pub fn done(self) -> Result<(), ModelError> {
        validate_type_name(&self.name)?;
        for supertype in &self.supertypes {
            validate_type_name(supertype)?;
            if *supertype == self.name {
                return Err(ModelError::SelfInheritance(self.name.as_str().to_string()));
            }
        }
        for constructor in &self.constructors {
            for param in constructor.params() {
                validate_type_name(param)?;
            }
        }
        self.builder.declarations.push(Declaration {
            name: self.name,
            kind: self.kind,
            annotations: self.annotations,
            constructors: self.constructors,
            supertypes: self.supertypes,
        });
        Ok(())
    }
}
