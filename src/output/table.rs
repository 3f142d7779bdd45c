//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use super::VersionRow;
use crate::cleaner::CleanupReport;

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Render document versions as a table
pub fn versions_table(rows: &[VersionRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        "Version", "Name", "Created", "Status", "Default", "Latest",
    ]);

    for row in rows {
        table.add_row(vec![
            row.version.as_str(),
            row.version_name.as_str(),
            row.created.as_str(),
            row.status.as_str(),
            yes_no(row.is_default),
            yes_no(row.is_latest),
        ]);
    }

    table
}

/// Render a cleanup report as a table, one row per touched version
pub fn report_table(report: &CleanupReport) -> Table {
    let (set_action, delete_action) = if report.dry_run {
        ("would set default", "would delete")
    } else {
        ("set default", "deleted")
    };

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Document", "Version", "Action"]);

    table.add_row(vec![
        report.document.as_str(),
        report.default_version.version.as_str(),
        set_action,
    ]);
    for record in &report.deleted_versions {
        table.add_row(vec![
            report.document.as_str(),
            record.version.as_str(),
            delete_action,
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssm::documents::VersionRecord;

    fn record(version: &str) -> VersionRecord {
        VersionRecord::parse(version).unwrap()
    }

    #[test]
    fn test_versions_table_with_data() {
        let rows = vec![VersionRow {
            version: "2".to_string(),
            version_name: "v2".to_string(),
            created: "2024-01-01 00:00:00".to_string(),
            status: "Active".to_string(),
            is_default: true,
            is_latest: false,
        }];

        let rendered = versions_table(&rows).to_string();
        assert!(rendered.contains("Version"));
        assert!(rendered.contains("Active"));
        assert!(rendered.contains("Yes"));
    }

    #[test]
    fn test_report_table_lists_every_version() {
        let report = CleanupReport {
            document: "test-doc".to_string(),
            default_version: record("3"),
            deleted_versions: vec![record("1"), record("2")],
            dry_run: false,
        };

        let rendered = report_table(&report).to_string();
        assert!(rendered.contains("set default"));
        assert_eq!(rendered.matches("deleted").count(), 2);
    }

    #[test]
    fn test_report_table_dry_run_wording() {
        let report = CleanupReport {
            document: "test-doc".to_string(),
            default_version: record("3"),
            deleted_versions: vec![record("1")],
            dry_run: true,
        };

        let rendered = report_table(&report).to_string();
        assert!(rendered.contains("would set default"));
        assert!(rendered.contains("would delete"));
    }
}
