//! JSON output formatter

use serde::Serialize;

use crate::cleaner::CleanupReport;

/// Serializable cleanup report for JSON output
#[derive(Serialize)]
pub struct JsonReport {
    document: String,
    default_version: String,
    deleted_versions: Vec<String>,
    dry_run: bool,
}

impl From<&CleanupReport> for JsonReport {
    fn from(report: &CleanupReport) -> Self {
        Self {
            document: report.document.clone(),
            default_version: report.default_version.version.clone(),
            deleted_versions: report
                .deleted_versions
                .iter()
                .map(|r| r.version.clone())
                .collect(),
            dry_run: report.dry_run,
        }
    }
}
