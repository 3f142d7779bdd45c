//! Seam between the cleanup logic and the document service

use crate::error::Result;
use crate::ssm::documents::DocumentVersion;

/// The three document operations the cleaner consumes
///
/// `SsmClient` implements this against AWS; tests substitute in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    /// List every version of a document (all pages)
    async fn list_document_versions(&self, document: &str) -> Result<Vec<DocumentVersion>>;

    /// Point the document's default version at `version`
    async fn update_default_version(&self, document: &str, version: &str) -> Result<()>;

    /// Delete a single version of a document
    async fn delete_document_version(&self, document: &str, version: &str) -> Result<()>;
}
