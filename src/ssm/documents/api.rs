//! SSM document API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::ssm::client::service_error;
use crate::ssm::{DocumentStore, SsmClient};

use super::models::DocumentVersion;

impl DocumentStore for SsmClient {
    /// List all versions of a document, following `NextToken` across pages
    async fn list_document_versions(&self, document: &str) -> Result<Vec<DocumentVersion>> {
        let mut all_versions = Vec::new();
        let mut next_token: Option<String> = None;
        let mut page = 1;

        loop {
            debug!(
                "{} for '{}' (page {})",
                api::LIST_DOCUMENT_VERSIONS,
                document,
                page
            );

            let output = self
                .sdk()
                .list_document_versions()
                .name(document)
                .max_results(api::PAGE_SIZE)
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(|e| service_error(format!("getting document list for '{}'", document), e))?;

            let versions = output.document_versions.unwrap_or_default();
            debug!("Page {} returned {} versions", page, versions.len());
            all_versions.extend(versions.into_iter().map(DocumentVersion::from));

            match output.next_token {
                Some(token) if !token.is_empty() => {
                    next_token = Some(token);
                    page += 1;
                }
                _ => break,
            }
        }

        debug!(
            "Fetched {} total versions for '{}'",
            all_versions.len(),
            document
        );
        Ok(all_versions)
    }

    async fn update_default_version(&self, document: &str, version: &str) -> Result<()> {
        debug!(
            "{} for '{}' to {}",
            api::UPDATE_DOCUMENT_DEFAULT_VERSION,
            document,
            version
        );

        self.sdk()
            .update_document_default_version()
            .name(document)
            .document_version(version)
            .send()
            .await
            .map_err(|e| {
                service_error(
                    format!("updating default version of '{}' to {}", document, version),
                    e,
                )
            })?;

        Ok(())
    }

    /// Delete one version; the version is always set so the call never
    /// removes the whole document
    async fn delete_document_version(&self, document: &str, version: &str) -> Result<()> {
        debug!(
            "{} for '{}' version {}",
            api::DELETE_DOCUMENT,
            document,
            version
        );

        self.sdk()
            .delete_document()
            .name(document)
            .document_version(version)
            .send()
            .await
            .map_err(|e| {
                service_error(
                    format!("deleting document version {} of '{}'", version, document),
                    e,
                )
            })?;

        Ok(())
    }
}
