//! Document command handlers

use log::{debug, info};

use crate::cleaner::{CleanerConfig, VersionCleaner};
use crate::cli::{CleanArgs, Cli, ListArgs};
use crate::error::Result;
use crate::output::{output_cleanup_report, output_versions};
use crate::ssm::{DocumentStore, SsmClient};
use crate::ui::{create_spinner, finish_spinner};

use super::models::{select_latest, VersionRecord};

/// Run the clean command
pub async fn run_clean_command(client: &SsmClient, cli: &Cli, args: &CleanArgs) -> Result<()> {
    let config = CleanerConfig {
        document_name: args.document.clone(),
        dry_run: args.dry_run,
    };
    debug!("Cleaning document with config: {:?}", config);

    let report = VersionCleaner::new(client, config).run().await?;

    info!(
        "Kept version {} of '{}', {} {} version(s)",
        report.default_version.version,
        report.document,
        if report.dry_run { "would delete" } else { "deleted" },
        report.deleted_versions.len()
    );
    output_cleanup_report(&report, &cli.output);

    Ok(())
}

/// Run the list command
pub async fn run_list_command(client: &SsmClient, cli: &Cli, args: &ListArgs) -> Result<()> {
    let spinner = create_spinner(
        &format!("Fetching versions of '{}'...", args.document),
        cli.batch,
    );
    let result = client.list_document_versions(&args.document).await;
    finish_spinner(spinner);
    let versions = result?;

    debug!("Document '{}' has {} versions", args.document, versions.len());

    // Unparseable identifiers are shown but never marked latest
    let records: Vec<VersionRecord> = versions
        .iter()
        .filter_map(|v| VersionRecord::parse(&v.version).ok())
        .collect();
    let latest = select_latest(&records).map(|r| r.version.as_str());

    output_versions(&versions, latest, &cli.output);

    Ok(())
}
