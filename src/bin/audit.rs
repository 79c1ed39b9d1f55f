//! Schema Audit CLI
//!
//! Reports the keywords, types, and formats used by a JSON Schema file, or by
//! every schema file below a directory.

use std::path::{Path, PathBuf};

use clap::Parser;
use schema_audit::{
    collect_schema_files, load_schema, AuditConfig, AuditReport, AuditSets, KeywordTable,
    OutputFormat, SchemaAuditor,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-audit")]
#[command(about = "Audit the keywords, types, and formats used by a JSON Schema")]
#[command(version)]
struct Cli {
    /// Path to the JSON Schema file (or a directory of schema files)
    #[arg(value_parser = existing_path)]
    file_path: PathBuf,

    /// Config file to layer over the default locations
    #[arg(short, long)]
    config: Option<String>,

    /// Report format (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn existing_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("Path '{}' does not exist.", s))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AuditConfig::load_from(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);
    let auditor = SchemaAuditor::new(KeywordTable::with_extensions(&config.keywords));

    let report = if cli.file_path.is_dir() {
        audit_directory(&auditor, &cli.file_path, &config)
    } else {
        match audit_file(&auditor, &cli.file_path) {
            Some(report) => report,
            None => return Ok(()),
        }
    };

    print!("{}", report.render(format, config.output.pretty)?);
    Ok(())
}

/// Audit a single file; read and decode failures are reported and yield no report
fn audit_file(auditor: &SchemaAuditor, path: &Path) -> Option<AuditReport> {
    let schema = match load_schema(path) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("{}", e);
            return None;
        }
    };

    let mut sets = AuditSets::new();
    auditor.audit(&schema, &mut sets);
    Some(AuditReport::new(vec![path.to_path_buf()], sets))
}

/// Audit every schema file below `dir` into one merged report, skipping files that fail
fn audit_directory(auditor: &SchemaAuditor, dir: &Path, config: &AuditConfig) -> AuditReport {
    let files = collect_schema_files(dir, &config.walk);
    let mut sets = AuditSets::new();
    let mut sources = Vec::with_capacity(files.len());

    for path in files {
        match load_schema(&path) {
            Ok(schema) => {
                auditor.audit(&schema, &mut sets);
                sources.push(path);
            }
            Err(e) => eprintln!("{}: {}", path.display(), e),
        }
    }

    info!(
        audited = sources.len(),
        keywords = sets.keywords.len(),
        "directory audit complete"
    );
    AuditReport::new(sources, sets)
}
