//! Error types for schema auditing

use std::path::PathBuf;
use thiserror::Error;

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, AuditError>;

/// Schema audit errors
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Error reading the file: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl AuditError {
    /// Path of the schema file the error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            AuditError::Read { path, .. } | AuditError::InvalidJson { path, .. } => Some(path),
            AuditError::Config(_) => None,
        }
    }
}
