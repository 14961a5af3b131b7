mod property;

use super::parse;
use crate::{
    direction::Direction,
    spec::{SortField, SortSpec},
};

fn fields(spec: &SortSpec) -> Vec<(&str, Direction)> {
    spec.iter().map(|f| (f.field.as_str(), f.direction)).collect()
}

#[test]
fn absent_input_yields_empty_spec() {
    assert!(parse(None).is_empty());
}

#[test]
fn empty_input_yields_empty_spec() {
    assert!(parse(Some("")).is_empty());
    assert!(parse(Some("   ")).is_empty());
}

#[test]
fn bare_token_is_ascending() {
    assert_eq!(fields(&parse(Some("name"))), [("name", Direction::Asc)]);
}

#[test]
fn leading_dash_is_descending_and_stripped() {
    assert_eq!(
        fields(&parse(Some("-created_at"))),
        [("created_at", Direction::Desc)]
    );
}

#[test]
fn directions_are_independent_per_field() {
    assert_eq!(
        fields(&parse(Some("name,-created_at,status"))),
        [
            ("name", Direction::Asc),
            ("created_at", Direction::Desc),
            ("status", Direction::Asc),
        ]
    );
}

#[test]
fn incidental_whitespace_is_squished() {
    assert_eq!(
        fields(&parse(Some(" name , -created_at "))),
        [("name", Direction::Asc), ("created_at", Direction::Desc)]
    );
}

#[test]
fn duplicate_field_keeps_first_occurrence() {
    assert_eq!(fields(&parse(Some("name,-name"))), [("name", Direction::Asc)]);
}

#[test]
fn duplicate_in_opposite_order_also_keeps_first() {
    assert_eq!(
        fields(&parse(Some("-name,name,name"))),
        [("name", Direction::Desc)]
    );
}

#[test]
fn empty_tokens_are_skipped() {
    assert_eq!(
        fields(&parse(Some("a,,b,"))),
        [("a", Direction::Asc), ("b", Direction::Asc)]
    );
}

#[test]
fn whitespace_between_dash_and_name_stays_in_the_field() {
    // squish runs before the prefix strip; "- name" keeps its space
    assert_eq!(fields(&parse(Some("- name"))), [(" name", Direction::Desc)]);
}

#[test]
fn lone_dash_is_skipped() {
    assert!(parse(Some("-")).is_empty());
    assert!(parse(Some("-, -")).is_empty());
}

#[test]
fn expected_output_yields_sort_spec_from_fields_equivalent() {
    let spec = parse(Some("name,-created_at"));
    let expected = SortSpec::from_fields([
        SortField::asc("name"),
        SortField::desc("created_at"),
    ]);

    assert_eq!(spec, expected);
}
