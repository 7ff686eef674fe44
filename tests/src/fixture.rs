//! Model fixtures for integration tests.

use crate::FixtureResult;
use edict_core::Diagnostics;
use edict_model::{
    AnnotationUse, DeclarationBuilder, DeclarationKind, ModelBuilder, ModelError,
};
use edict_verifier::Processor;

/// Assembles a declaration model, runs the processor over it and returns the
/// collected diagnostics.
///
/// Declaration errors are deferred: the first one surfaces when the fixture
/// is checked, so fixtures read as one fluent expression.
pub struct Fixture {
    builder: ModelBuilder,
    error: Option<ModelError>,
}

impl Fixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self {
            builder: ModelBuilder::new(),
            error: None,
        }
    }

    /// Declare a marker annotation type carrying constraint metadata.
    pub fn marker<I>(mut self, name: &str, metadata: I) -> Self
    where
        I: IntoIterator<Item = AnnotationUse>,
    {
        let mut declaration = self.builder.declare(name, DeclarationKind::AnnotationType);
        for annotation in metadata {
            declaration = declaration.annotate(annotation);
        }
        let result = declaration.done();
        self.record(result);
        self
    }

    /// Declare an annotation type with no constraint metadata.
    pub fn plain_annotation(mut self, name: &str) -> Self {
        let result = self
            .builder
            .declare(name, DeclarationKind::AnnotationType)
            .done();
        self.record(result);
        self
    }

    /// Declare a class, configured through the declaration builder.
    pub fn class(
        mut self,
        name: &str,
        configure: impl FnOnce(DeclarationBuilder<'_>) -> DeclarationBuilder<'_>,
    ) -> Self {
        let result = configure(self.builder.declare(name, DeclarationKind::Class)).done();
        self.record(result);
        self
    }

    /// Declare an interface, configured through the declaration builder.
    pub fn interface(
        mut self,
        name: &str,
        configure: impl FnOnce(DeclarationBuilder<'_>) -> DeclarationBuilder<'_>,
    ) -> Self {
        let result = configure(self.builder.declare(name, DeclarationKind::Interface)).done();
        self.record(result);
        self
    }

    /// Build the model and sweep it with the default processor.
    pub fn check(self) -> FixtureResult<Diagnostics> {
        self.check_with(&Processor::new())
    }

    /// Build the model and sweep it with a custom processor.
    pub fn check_with(self, processor: &Processor) -> FixtureResult<Diagnostics> {
        if let Some(error) = self.error {
            return Err(error.into());
        }
        let model = self.builder.build()?;
        let mut sink = Diagnostics::new();
        processor.check_all(&model, &mut sink)?;
        Ok(sink)
    }

    fn record(&mut self, result: Result<(), ModelError>) {
        if let Err(error) = result {
            self.error.get_or_insert(error);
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
