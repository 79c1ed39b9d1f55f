//! Schema Audit
//!
//! Inventories the keywords, primitive types, and string formats a JSON
//! Schema document uses. The audit is structural only: it neither validates
//! instances against the schema nor checks that the schema is well-formed.
//!
//! ## Example
//!
//! ```
//! use schema_audit::audit_schema;
//! use serde_json::json;
//!
//! let sets = audit_schema(&json!({
//!     "type": "object",
//!     "properties": {"when": {"type": "string", "format": "date-time"}}
//! }));
//!
//! assert!(sets.keywords.contains("properties"));
//! assert!(sets.types.contains("object"));
//! assert!(sets.formats.contains("date-time"));
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;

pub use audit::{audit_schema, audit_schema_into, AuditSets, KeywordKind, KeywordTable, SchemaAuditor};
pub use config::{AuditConfig, KeywordConfig, OutputFormat, WalkConfig};
pub use error::{AuditError, Result};
pub use loader::{collect_schema_files, load_schema};
pub use report::AuditReport;
