// File: crates/strata-core/src/field.rs
// Summary: Field descriptors and numeric-type helpers for layer schemas.

/// Field descriptor: a name plus the backend-declared type name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    type_name: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self { name: name.into(), type_name: type_name.into() }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Type names recognized as numeric across common vector data backends:
/// PostgreSQL numeric/floating types plus the generic names used by
/// in-memory and temporary layers.
pub const NUMERIC_FIELD_TYPE_NAMES: &[&str] = &[
    "numeric",
    "decimal",
    "float4",
    "float8",
    "double precision",
    "real",
    "double",
    "float",
    "integer",
    "int",
    "int2",
    "int4",
    "int8",
    "bigint",
    "smallint",
    "serial",
];

/// True when `name` is a recognized numeric field type name (case-insensitive).
pub fn is_numeric_type_name(name: &str) -> bool {
    NUMERIC_FIELD_TYPE_NAMES.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/// Names of `fields`, sorted lexicographically.
/// `None` (no schema at all) yields the `None` sentinel; an empty slice is a
/// valid schema and yields an empty list.
pub fn list_field_names(fields: Option<&[Field]>) -> Option<Vec<String>> {
    let fields = fields?;
    let mut names: Vec<String> = fields.iter().map(|f| f.name().to_string()).collect();
    names.sort();
    Some(names)
}

/// Like `list_field_names`, keeping only fields whose declared type name is
/// in `NUMERIC_FIELD_TYPE_NAMES`.
pub fn list_numeric_fields(fields: Option<&[Field]>) -> Option<Vec<String>> {
    let fields = fields?;
    let mut names: Vec<String> = fields
        .iter()
        .filter(|f| is_numeric_type_name(f.type_name()))
        .map(|f| f.name().to_string())
        .collect();
    names.sort();
    Some(names)
}
