#![allow(clippy::unwrap_used)]

use docfold::{DocumentationComment, Example, ExampleData};
use rstest::rstest;

fn record(description: Option<&str>, example_names: &[&str]) -> DocumentationComment {
    DocumentationComment::new(
        description.map(str::to_string),
        ExampleData::from_examples(
            example_names
                .iter()
                .map(|name| Example::single(*name, format!("{name}()"))),
        ),
    )
}

#[rstest]
#[case(record(None, &[]))]
#[case(record(Some("docs"), &[]))]
#[case(record(None, &["e1"]))]
#[case(record(Some("docs"), &["e1", "e2"]))]
fn test_empty_record_is_two_sided_identity(#[case] sample: DocumentationComment) {
    let empty = DocumentationComment::empty();
    assert_eq!(sample.merge(&empty), sample);
    assert_eq!(empty.merge(&sample), sample);
}

#[rstest]
#[case(Some("fallback"))]
#[case(None)]
fn test_present_primary_description_wins_outright(#[case] fallback_description: Option<&str>) {
    let primary = record(Some("primary"), &[]);
    let fallback = record(fallback_description, &["e1"]);
    assert_eq!(primary.merge(&fallback).description(), Some("primary"));
}

#[test]
fn test_absent_primary_description_falls_back() {
    let primary = record(None, &["e1"]);
    let fallback = record(Some("fallback"), &[]);
    assert_eq!(primary.merge(&fallback).description(), Some("fallback"));

    let neither = record(None, &[]).merge(&record(None, &["e1"]));
    assert_eq!(neither.description(), None);
}

#[test]
fn test_examples_union_preserves_both_inputs() {
    let primary = record(None, &["a", "b"]);
    let fallback = record(None, &["b", "c"]);

    let merged = primary.merge(&fallback);
    let names: Vec<_> = merged.examples().iter().map(Example::name).collect();
    // Primary entries first, then fallback entries it did not define.
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_examples_primary_wins_per_name() {
    let primary = DocumentationComment::new(
        None,
        ExampleData::from_examples([Example::single("spawn", "primary()")]),
    );
    let fallback = DocumentationComment::new(
        None,
        ExampleData::from_examples([Example::single("spawn", "fallback()")]),
    );

    let merged = primary.merge(&fallback);
    assert_eq!(merged.examples().len(), 1);
    assert_eq!(merged.examples().get("spawn").unwrap().values(), ["primary()"]);
}

#[test]
fn test_merge_leaves_operands_untouched() {
    let primary = record(Some("primary"), &["a"]);
    let fallback = record(Some("fallback"), &["b"]);
    let before = (primary.clone(), fallback.clone());

    let _ = primary.merge(&fallback);
    assert_eq!((primary, fallback), before);
}
