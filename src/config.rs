//! Configuration management for schema auditing
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (schema-audit.toml)
//! - Environment variables (SCHEMA_AUDIT__*)
//!
//! ## Example config file (schema-audit.toml):
//! ```toml
//! [output]
//! format = "json"
//! pretty = true
//!
//! [keywords]
//! subschema_maps = ["patternProperties"]
//! subschemas = ["additionalProperties"]
//!
//! [walk]
//! skip_prefixes = ["target/", ".git/", "node_modules/"]
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Main configuration for the auditor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Extra keywords to descend into
    #[serde(default)]
    pub keywords: KeywordConfig,

    /// Directory walking settings
    #[serde(default)]
    pub walk: WalkConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format (text or json)
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON reports
    #[serde(default = "default_true")]
    pub pretty: bool,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Keywords added on top of the built-in table.
///
/// Names already known to the auditor keep their built-in category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Keywords holding an array of sub-schemas
    #[serde(default)]
    pub subschema_lists: Vec<String>,

    /// Keywords holding an object of named sub-schemas
    #[serde(default)]
    pub subschema_maps: Vec<String>,

    /// Keywords holding a single sub-schema
    #[serde(default)]
    pub subschemas: Vec<String>,
}

/// Directory walking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Relative path prefixes skipped when auditing a directory
    #[serde(default = "default_skip_prefixes")]
    pub skip_prefixes: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_skip_prefixes() -> Vec<String> {
    vec![
        "target/".to_string(),
        ".git/".to_string(),
        "node_modules/".to_string(),
    ]
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: true,
        }
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            skip_prefixes: default_skip_prefixes(),
        }
    }
}

impl AuditConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, layering `config_path` (required if given) over the defaults
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = [
            "schema-audit.toml",
            ".schema-audit.toml",
            "config/schema-audit.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "familiar", "schema-audit") {
            let xdg_config = config_dir.config_dir().join("schema-audit.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("SCHEMA_AUDIT")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
