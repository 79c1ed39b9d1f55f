//! Audit Tests Against Fixture Schemas
//!
//! Runs the auditor over the JSON fixtures and checks the full inventories.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use schema_audit::{
    audit_schema, audit_schema_into, collect_schema_files, load_schema, AuditReport, AuditSets,
    WalkConfig,
};

fn fixtures_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn fixture(source: &str) -> serde_json::Value {
    serde_json::from_str(source).unwrap()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// =============================================================================
// Fixture Inventories
// =============================================================================

#[test]
fn test_full_keyword_inventory() {
    let schema = fixture(include_str!("fixtures/schema.json"));
    let sets = audit_schema(&schema);

    assert_eq!(
        sets.keywords,
        set(&[
            "$defs", "allOf", "anyOf", "contains", "definitions", "dependentSchemas",
            "description", "else", "format", "if", "items", "not", "oneOf", "pattern",
            "prefixItems", "properties", "propertyNames", "then", "title", "type",
            "unevaluatedItems",
        ])
    );
    assert!(!sets.keywords.contains("nonKeyword"));
    assert_eq!(sets.types, set(&["array", "string"]));
    assert_eq!(sets.formats, set(&["date-time", "uri"]));
}

#[test]
fn test_nested_properties_are_discovered() {
    let schema = fixture(include_str!("fixtures/nested_properties.json"));
    let sets = audit_schema(&schema);

    assert_eq!(
        sets.keywords,
        set(&["type", "properties", "minimum", "maximum", "format"])
    );
    assert_eq!(sets.types, set(&["object", "number", "string", "null"]));
    assert_eq!(sets.formats, set(&["date"]));
}

#[test]
fn test_boolean_subschemas() {
    let schema = fixture(include_str!("fixtures/boolean_subschemas.json"));
    let sets = audit_schema(&schema);

    assert_eq!(
        sets.keywords,
        set(&["additionalProperties", "items", "not", "properties"])
    );
    assert!(sets.types.is_empty());
    assert!(sets.formats.is_empty());
}

// =============================================================================
// Accumulation Properties
// =============================================================================

#[test]
fn test_repeated_audits_are_identical() {
    let schema = fixture(include_str!("fixtures/schema.json"));
    assert_eq!(audit_schema(&schema), audit_schema(&schema));
}

#[test]
fn test_shared_accumulators_yield_union() {
    let first = fixture(include_str!("fixtures/schema.json"));
    let second = fixture(include_str!("fixtures/nested_properties.json"));

    let mut shared = AuditSets::new();
    audit_schema_into(&first, &mut shared);
    audit_schema_into(&second, &mut shared);

    let mut expected = audit_schema(&first);
    expected.merge(audit_schema(&second));

    assert_eq!(shared, expected);
    assert_eq!(shared.types, set(&["array", "string", "object", "number", "null"]));
    assert_eq!(shared.formats, set(&["date-time", "uri", "date"]));
}

// =============================================================================
// Loading and Reporting
// =============================================================================

#[test]
fn test_load_and_report_fixture() {
    let path = fixtures_path().join("schema.json");
    let schema = load_schema(&path).unwrap();
    let report = AuditReport::new(vec![path.clone()], audit_schema(&schema));

    let text = report.to_text();
    assert!(text.contains("\nTypes used in the schema:\narray, string\n"));
    assert!(text.contains("\nFormats used in the schema:\ndate-time, uri\n"));
    assert_eq!(report.sources, vec![path]);
}

#[test]
fn test_fixture_directory_collection() {
    let files = collect_schema_files(&fixtures_path(), &WalkConfig::default());
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();

    assert_eq!(
        names,
        vec!["boolean_subschemas.json", "nested_properties.json", "schema.json"]
    );
}
