//! Schema Loading
//!
//! Reads schema documents from disk and collects schema files below a
//! directory for batch audits.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::WalkConfig;
use crate::error::{AuditError, Result};

/// Read and parse a JSON schema file
pub fn load_schema(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| AuditError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_schema(path, &content)
}

/// Parse schema text that was read from `path`
pub fn parse_schema(path: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|source| AuditError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Collect every `.json` file below `dir`, sorted by path
pub fn collect_schema_files(dir: &Path, config: &WalkConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
        .filter(|e| {
            let relative = e.path().strip_prefix(dir).unwrap_or(e.path());
            let relative_str = relative.to_string_lossy().replace('\\', "/");
            let skipped = config
                .skip_prefixes
                .iter()
                .any(|prefix| relative_str.starts_with(prefix.as_str()));
            if skipped {
                debug!(path = %relative_str, "skipping schema file");
            }
            !skipped
        })
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}
