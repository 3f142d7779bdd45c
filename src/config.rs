/// Configuration constants for the SSM document API
pub mod api {
    /// Largest page size accepted by ListDocumentVersions
    pub const PAGE_SIZE: i32 = 50;

    /// Operation names used in error context and debug logs
    pub const LIST_DOCUMENT_VERSIONS: &str = "ListDocumentVersions";
    pub const UPDATE_DOCUMENT_DEFAULT_VERSION: &str = "UpdateDocumentDefaultVersion";
    pub const DELETE_DOCUMENT: &str = "DeleteDocument";
}

/// Environment variables read by the CLI
pub mod env {
    /// Document to clean when none is given on the command line
    pub const DOCUMENT_NAME: &str = "CLEAN_DOCUMENT_NAME";

    pub const REGION: &str = "AWS_REGION";

    pub const PROFILE: &str = "AWS_PROFILE";

    /// Service-specific endpoint override, same name the AWS SDKs honor
    pub const ENDPOINT_URL: &str = "AWS_ENDPOINT_URL_SSM";
}

/// Default values for CLI
pub mod defaults {
    /// Document created by the collector e2e suite
    pub const DOCUMENT_NAME: &str = "testAWSDistroOTel-Collector";

    /// Default log level; info so each deletion is visible
    pub const LOG_LEVEL: &str = "info";
}
