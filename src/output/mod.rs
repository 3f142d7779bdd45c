//! Output formatting module
//!
//! Handles different output formats: table, JSON

mod json;
mod table;

use crate::cleaner::CleanupReport;
use crate::cli::OutputFormat;
use crate::ssm::documents::DocumentVersion;

/// Flattened version data for output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VersionRow {
    pub version: String,
    pub version_name: String,
    pub created: String,
    pub status: String,
    pub is_default: bool,
    pub is_latest: bool,
}

impl VersionRow {
    /// Create a row, marking it latest when its identifier matches `latest`
    pub fn new(version: &DocumentVersion, latest: Option<&str>) -> Self {
        Self {
            version: version.version.clone(),
            version_name: version.version_name.clone().unwrap_or_else(|| "-".to_string()),
            created: version.created_display(),
            status: version.status.clone().unwrap_or_else(|| "-".to_string()),
            is_default: version.is_default,
            is_latest: latest == Some(version.version.as_str()),
        }
    }
}

/// Print the versions of a document
pub fn output_versions(versions: &[DocumentVersion], latest: Option<&str>, format: &OutputFormat) {
    let rows: Vec<VersionRow> = versions
        .iter()
        .map(|v| VersionRow::new(v, latest))
        .collect();

    match format {
        OutputFormat::Table => println!("{}", table::versions_table(&rows)),
        OutputFormat::Json => print_json(&rows),
    }
}

/// Print the outcome of a cleanup pass
pub fn output_cleanup_report(report: &CleanupReport, format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", table::report_table(report)),
        OutputFormat::Json => print_json(&json::JsonReport::from(report)),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
