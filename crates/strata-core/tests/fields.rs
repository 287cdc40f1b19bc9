// File: crates/strata-core/tests/fields.rs
// Purpose: Validate field-name listing and the numeric type-name catalog.

use strata_core::{list_field_names, list_numeric_fields, Field, NUMERIC_FIELD_TYPE_NAMES};

#[test]
fn empty_schema_returns_empty_list() {
    // Empty is a valid, common case (a layer with no attributes), not an error.
    let result = list_field_names(Some(&[]));
    assert_eq!(result, Some(vec![]));
}

#[test]
fn missing_schema_returns_sentinel() {
    assert_eq!(list_field_names(None), None);
    assert_eq!(list_numeric_fields(None), None);
}

#[test]
fn names_come_back_sorted() {
    let fields = vec![
        Field::new("depth", "double"),
        Field::new("altitude", "double"),
        Field::new("borehole", "text"),
    ];
    let result = list_field_names(Some(&fields)).expect("schema present");
    assert_eq!(result, vec!["altitude", "borehole", "depth"]);
}

#[test]
fn numeric_filter_drops_text_fields() {
    let fields = vec![
        Field::new("name", "text"),
        Field::new("depth", "double precision"),
        Field::new("axis_id", "integer"),
        Field::new("note", "varchar"),
    ];
    let result = list_numeric_fields(Some(&fields)).expect("schema present");
    assert_eq!(result, vec!["axis_id", "depth"]);
}

#[test]
fn numeric_type_names_cover_postgres_and_memory_layers() {
    for name in ["numeric", "decimal", "float4", "float8", "double precision"] {
        assert!(
            NUMERIC_FIELD_TYPE_NAMES.contains(&name),
            "NUMERIC_FIELD_TYPE_NAMES should include {name:?}"
        );
    }
}

#[test]
fn numeric_type_match_is_case_insensitive() {
    let fields = vec![Field::new("depth", "Double Precision")];
    let result = list_numeric_fields(Some(&fields)).expect("schema present");
    assert_eq!(result, vec!["depth"]);
}
