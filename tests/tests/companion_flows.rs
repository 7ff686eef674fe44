//! Companion-annotation constraint flows.

use edict_tests::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_missing_required_annotation_is_reported_once() {
    // GIVEN - marker requires {A, B}, target carries only A
    let diagnostics = Fixture::new()
        .marker(
            "com.example.Marker",
            [AnnotationUse::with_types(
                meta::REQUIRE_ANNOTATIONS,
                ["com.example.A", "com.example.B"],
            )],
        )
        .plain_annotation("com.example.A")
        .plain_annotation("com.example.B")
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.Marker"))
                .annotate(AnnotationUse::marker("com.example.A"))
        })
        .check()
        .unwrap();

    // THEN - exactly one error naming B, none naming A
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.all()[0].message,
        "Class com.example.Annotated is annotated with @Marker but not with @com.example.B"
    );
}

#[test]
fn test_all_required_annotations_present_is_clean() {
    // GIVEN
    let diagnostics = Fixture::new()
        .marker(
            "com.example.Marker",
            [AnnotationUse::with_types(
                meta::REQUIRE_ANNOTATIONS,
                ["com.example.A"],
            )],
        )
        .plain_annotation("com.example.A")
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.Marker"))
                .annotate(AnnotationUse::marker("com.example.A"))
        })
        .check()
        .unwrap();

    // THEN
    assert!(diagnostics.is_empty());
}

#[test]
fn test_required_error_precedes_recommended_warning() {
    // GIVEN - required {X} and recommended {Y}, target carries neither
    let diagnostics = Fixture::new()
        .marker(
            "com.example.Marker",
            [
                AnnotationUse::with_types(meta::REQUIRE_ANNOTATIONS, ["com.example.X"]),
                AnnotationUse::with_types(meta::RECOMMEND_ANNOTATIONS, ["com.example.Y"]),
            ],
        )
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.Marker"))
        })
        .check()
        .unwrap();

    // THEN - two diagnostics: error for X, then warning for Y
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.all()[0].severity, Severity::Error);
    assert_eq!(
        diagnostics.all()[0].message,
        "Class com.example.Annotated is annotated with @Marker but not with @com.example.X"
    );
    assert_eq!(diagnostics.all()[1].severity, Severity::Warning);
    assert_eq!(
        diagnostics.all()[1].message,
        "Class com.example.Annotated is annotated with @Marker but not with @com.example.Y"
    );
}

#[test]
fn test_missed_recommendation_warns_without_blocking() {
    // GIVEN - a recommendation only
    let diagnostics = Fixture::new()
        .marker(
            "com.example.Marker",
            [AnnotationUse::with_types(
                meta::RECOMMEND_ANNOTATIONS,
                ["com.example.Y"],
            )],
        )
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.Marker"))
        })
        .check()
        .unwrap();

    // THEN - a warning, never an error
    assert!(diagnostics.has_only_warnings());
    assert_eq!(diagnostics.warnings().count(), 1);
}

#[test]
fn test_diagnostics_follow_descriptor_declaration_order() {
    // GIVEN - three required companions, none present
    let diagnostics = Fixture::new()
        .marker(
            "com.example.Marker",
            [AnnotationUse::with_types(
                meta::REQUIRE_ANNOTATIONS,
                ["com.example.C", "com.example.A", "com.example.B"],
            )],
        )
        .class("com.example.Annotated", |c| {
            c.annotate(AnnotationUse::marker("com.example.Marker"))
        })
        .check()
        .unwrap();

    // THEN - emission order is the declared order, not name order
    let messages: Vec<&str> = diagnostics.all().iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Class com.example.Annotated is annotated with @Marker but not with @com.example.C",
            "Class com.example.Annotated is annotated with @Marker but not with @com.example.A",
            "Class com.example.Annotated is annotated with @Marker but not with @com.example.B",
        ]
    );
}
