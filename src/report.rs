//! Audit report rendering

use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

use crate::audit::AuditSets;
use crate::config::OutputFormat;

/// Sorted audit results ready for output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Schema files that contributed to the report
    pub sources: Vec<PathBuf>,
    pub keywords: Vec<String>,
    pub types: Vec<String>,
    pub formats: Vec<String>,
}

impl AuditReport {
    pub fn new(sources: Vec<PathBuf>, sets: AuditSets) -> Self {
        Self {
            sources,
            keywords: sets.keywords.into_iter().collect(),
            types: sets.types.into_iter().collect(),
            formats: sets.formats.into_iter().collect(),
        }
    }

    /// Three sections, each a blank line, a header, and a comma-joined list
    pub fn to_text(&self) -> String {
        let sections = [
            ("Keywords used in the schema:", &self.keywords),
            ("Types used in the schema:", &self.types),
            ("Formats used in the schema:", &self.formats),
        ];

        let mut out = String::new();
        for (header, items) in sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", header);
            let _ = writeln!(out, "{}", items.join(", "));
        }
        out
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }

    pub fn render(&self, format: OutputFormat, pretty: bool) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => self.to_json(pretty).map(|json| json + "\n"),
        }
    }
}
