//! Schema Keyword Auditing
//!
//! Walks a JSON Schema document and inventories the keywords, primitive
//! types, and string formats it uses. Only object nodes carry keywords;
//! every other JSON value (including the boolean schemas `true` and `false`)
//! is a leaf.
//!
//! Descent is driven by a [`KeywordTable`] that maps keyword names to the
//! shape of sub-schemas they hold:
//!
//! | Kind            | Default keywords                                               |
//! |-----------------|----------------------------------------------------------------|
//! | `SubschemaList` | `allOf`, `anyOf`, `oneOf`, `prefixItems`                       |
//! | `SubschemaMap`  | `properties`, `definitions`, `$defs`, `dependentSchemas`       |
//! | `Subschema`     | `items`, `unevaluatedItems`, `contains`, `not`, `if`, `then`, `else`, `propertyNames` |
//! | `Type`          | `type`                                                         |
//! | `Format`        | `format`                                                       |
//!
//! Any other key is recorded as a keyword and its value is not inspected.

use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::config::KeywordConfig;

// =============================================================================
// Keyword Table
// =============================================================================

/// What a keyword's value holds, as far as the audit is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    /// An array of sub-schemas (`allOf`, `prefixItems`, ...)
    SubschemaList,
    /// An object mapping names to sub-schemas (`properties`, `$defs`, ...)
    SubschemaMap,
    /// A single nested sub-schema (`items`, `not`, `if`, ...)
    Subschema,
    /// A type name or an array of type names
    Type,
    /// A string format name
    Format,
}

const DEFAULT_KEYWORDS: &[(&str, KeywordKind)] = &[
    ("allOf", KeywordKind::SubschemaList),
    ("anyOf", KeywordKind::SubschemaList),
    ("oneOf", KeywordKind::SubschemaList),
    ("prefixItems", KeywordKind::SubschemaList),
    ("properties", KeywordKind::SubschemaMap),
    ("definitions", KeywordKind::SubschemaMap),
    ("$defs", KeywordKind::SubschemaMap),
    ("dependentSchemas", KeywordKind::SubschemaMap),
    ("items", KeywordKind::Subschema),
    ("unevaluatedItems", KeywordKind::Subschema),
    ("contains", KeywordKind::Subschema),
    ("not", KeywordKind::Subschema),
    ("if", KeywordKind::Subschema),
    ("then", KeywordKind::Subschema),
    ("else", KeywordKind::Subschema),
    ("propertyNames", KeywordKind::Subschema),
    ("type", KeywordKind::Type),
    ("format", KeywordKind::Format),
];

/// Lookup table from keyword name to [`KeywordKind`]
#[derive(Debug, Clone)]
pub struct KeywordTable {
    kinds: HashMap<String, KeywordKind>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_KEYWORDS
                .iter()
                .map(|(name, kind)| (name.to_string(), *kind))
                .collect(),
        }
    }
}

impl KeywordTable {
    /// The default table extended with the keywords named in `config`
    pub fn with_extensions(config: &KeywordConfig) -> Self {
        let mut table = Self::default();
        let extensions = [
            (&config.subschema_lists, KeywordKind::SubschemaList),
            (&config.subschema_maps, KeywordKind::SubschemaMap),
            (&config.subschemas, KeywordKind::Subschema),
        ];
        for (names, kind) in extensions {
            for name in names {
                if !table.insert(name.clone(), kind) {
                    debug!(keyword = %name, "keyword already categorized; extension ignored");
                }
            }
        }
        table
    }

    /// Register a keyword. Existing entries are never re-categorized;
    /// returns `false` when `keyword` was already present.
    pub fn insert(&mut self, keyword: impl Into<String>, kind: KeywordKind) -> bool {
        let keyword = keyword.into();
        if self.kinds.contains_key(&keyword) {
            return false;
        }
        self.kinds.insert(keyword, kind);
        true
    }

    /// Category of `keyword`, or `None` for keywords whose value is not inspected
    pub fn kind_of(&self, keyword: &str) -> Option<KeywordKind> {
        self.kinds.get(keyword).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

// =============================================================================
// Accumulators
// =============================================================================

/// Keywords, types, and formats collected during an audit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditSets {
    pub keywords: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub formats: BTreeSet<String>,
}

impl AuditSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.types.is_empty() && self.formats.is_empty()
    }

    /// Fold another set of results into this one
    pub fn merge(&mut self, other: AuditSets) {
        self.keywords.extend(other.keywords);
        self.types.extend(other.types);
        self.formats.extend(other.formats);
    }
}

// =============================================================================
// Auditor
// =============================================================================

/// Recursive keyword auditor
#[derive(Debug, Clone, Default)]
pub struct SchemaAuditor {
    table: KeywordTable,
}

impl SchemaAuditor {
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Audit `schema`, merging everything found into `sets`
    pub fn audit(&self, schema: &Value, sets: &mut AuditSets) {
        let Value::Object(node) = schema else {
            return;
        };

        for (keyword, value) in node {
            sets.keywords.insert(keyword.clone());

            match self.table.kind_of(keyword) {
                Some(KeywordKind::SubschemaList) => match value {
                    Value::Array(subschemas) => {
                        for subschema in subschemas {
                            self.audit(subschema, sets);
                        }
                    }
                    other => skip_malformed(keyword, other),
                },
                Some(KeywordKind::SubschemaMap) => match value {
                    Value::Object(subschemas) => {
                        for subschema in subschemas.values() {
                            self.audit(subschema, sets);
                        }
                    }
                    other => skip_malformed(keyword, other),
                },
                Some(KeywordKind::Subschema) => self.audit(value, sets),
                Some(KeywordKind::Type) => collect_types(keyword, value, sets),
                Some(KeywordKind::Format) => match value {
                    Value::String(format) => {
                        sets.formats.insert(format.clone());
                    }
                    other => skip_malformed(keyword, other),
                },
                None => {}
            }
        }
    }
}

fn collect_types(keyword: &str, value: &Value, sets: &mut AuditSets) {
    match value {
        Value::String(ty) => {
            sets.types.insert(ty.clone());
        }
        Value::Array(types) => {
            for ty in types {
                match ty {
                    Value::String(ty) => {
                        sets.types.insert(ty.clone());
                    }
                    other => skip_malformed(keyword, other),
                }
            }
        }
        other => skip_malformed(keyword, other),
    }
}

fn skip_malformed(keyword: &str, value: &Value) {
    debug!(keyword = %keyword, found = json_kind(value), "unexpected value shape, skipping");
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Audit `schema` with the default keyword table into fresh sets
pub fn audit_schema(schema: &Value) -> AuditSets {
    let mut sets = AuditSets::default();
    audit_schema_into(schema, &mut sets);
    sets
}

/// Audit `schema` with the default keyword table, merging into `sets`
pub fn audit_schema_into(schema: &Value, sets: &mut AuditSets) {
    SchemaAuditor::default().audit(schema, sets);
}
