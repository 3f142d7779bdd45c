//! Collapse a document to its latest version
//!
//! The pass is strictly sequential: list, pick the highest version, make it
//! the default, then delete every other version. The first failure ends the
//! run; nothing is retried or rolled back.

use log::info;

use crate::error::{CleanerError, Result};
use crate::ssm::documents::{parse_versions, select_latest, VersionRecord};
use crate::ssm::DocumentStore;

/// What to clean and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerConfig {
    pub document_name: String,
    /// Log the plan without calling any mutating operation
    pub dry_run: bool,
}

impl CleanerConfig {
    pub fn new(document_name: &str) -> Self {
        Self {
            document_name: document_name.to_string(),
            dry_run: false,
        }
    }
}

/// Outcome of a cleanup pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    pub document: String,
    /// Version now (or, in a dry run, to be) set as default
    pub default_version: VersionRecord,
    /// Versions deleted (or, in a dry run, to be deleted), in listing order
    pub deleted_versions: Vec<VersionRecord>,
    pub dry_run: bool,
}

/// Keeps only the highest-numbered version of a document
pub struct VersionCleaner<'a, S: DocumentStore> {
    store: &'a S,
    config: CleanerConfig,
}

impl<'a, S: DocumentStore> VersionCleaner<'a, S> {
    pub fn new(store: &'a S, config: CleanerConfig) -> Self {
        Self { store, config }
    }

    /// Run the cleanup pass
    pub async fn run(&self) -> Result<CleanupReport> {
        let document = self.config.document_name.as_str();

        let versions = self.store.list_document_versions(document).await?;
        if versions.is_empty() {
            return Err(CleanerError::EmptyResult {
                document: document.to_string(),
            });
        }

        // All identifiers are parsed before anything is mutated
        let records = parse_versions(&versions)?;
        let latest = select_latest(&records)
            .cloned()
            .ok_or_else(|| CleanerError::EmptyResult {
                document: document.to_string(),
            })?;

        if self.config.dry_run {
            info!("[dry-run] Would update default version to {}", latest.ordinal);
        } else {
            self.store
                .update_default_version(document, &latest.version)
                .await?;
            info!("Updated default version to {}", latest.ordinal);
        }

        let mut deleted_versions = Vec::with_capacity(records.len().saturating_sub(1));
        for record in records {
            if record.ordinal == latest.ordinal {
                continue;
            }
            if self.config.dry_run {
                info!("[dry-run] Would delete document version {}", record.ordinal);
            } else {
                self.store
                    .delete_document_version(document, &record.version)
                    .await?;
                info!("Document version deleted {}", record.ordinal);
            }
            deleted_versions.push(record);
        }

        Ok(CleanupReport {
            document: document.to_string(),
            default_version: latest,
            deleted_versions,
            dry_run: self.config.dry_run,
        })
    }
}
