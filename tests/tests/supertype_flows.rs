//! Required-supertype constraint flows.

use edict_tests::prelude::*;
use pretty_assertions::assert_eq;

fn require_auditable() -> Fixture {
    Fixture::new().marker(
        "com.example.RequireAuditable",
        [AnnotationUse::with_types(
            meta::REQUIRE_SUPERTYPES,
            ["com.example.Auditable"],
        )],
    )
}

#[test]
fn test_missing_supertype_is_an_error() {
    // GIVEN - target implements nothing
    let diagnostics = require_auditable()
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.RequireAuditable"))
        })
        .check()
        .unwrap();

    // THEN
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.all()[0].severity, Severity::Error);
    assert_eq!(
        diagnostics.all()[0].message,
        "Class com.example.Annotated is annotated with @RequireAuditable \
         but does not have com.example.Auditable as a supertype"
    );
}

#[test]
fn test_directly_implemented_supertype_is_clean() {
    // GIVEN
    let diagnostics = require_auditable()
        .interface("com.example.Auditable", |i| i)
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.RequireAuditable"))
                .extends("com.example.Auditable")
        })
        .check()
        .unwrap();

    // THEN
    assert!(diagnostics.is_empty());
}

#[test]
fn test_transitively_inherited_supertype_is_clean() {
    // GIVEN - Annotated extends Base, Base implements Auditable
    let diagnostics = require_auditable()
        .interface("com.example.Auditable", |i| i)
        .class("com.example.Base", |c| c.extends("com.example.Auditable"))
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.RequireAuditable"))
                .extends("com.example.Base")
        })
        .check()
        .unwrap();

    // THEN
    assert!(diagnostics.is_empty());
}

#[test]
fn test_external_supertype_satisfies_by_name() {
    // GIVEN - the required supertype has no declaration in the model
    let diagnostics = Fixture::new()
        .marker(
            "com.example.RequireList",
            [AnnotationUse::with_types(
                meta::REQUIRE_SUPERTYPES,
                ["java.util.AbstractList"],
            )],
        )
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.RequireList"))
                .extends("java.util.AbstractList")
        })
        .check()
        .unwrap();

    // THEN - nominal match on the canonical name is enough
    assert!(diagnostics.is_empty());
}

#[test]
fn test_each_missing_supertype_is_reported_separately() {
    // GIVEN - two required supertypes, neither present
    let diagnostics = Fixture::new()
        .marker(
            "com.example.RequireBoth",
            [AnnotationUse::with_types(
                meta::REQUIRE_SUPERTYPES,
                ["com.example.Auditable", "com.example.Closeable"],
            )],
        )
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.RequireBoth"))
        })
        .check()
        .unwrap();

    // THEN - never a merged aggregate message
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics.all()[0]
        .message
        .contains("com.example.Auditable as a supertype"));
    assert!(diagnostics.all()[1]
        .message
        .contains("com.example.Closeable as a supertype"));
}
