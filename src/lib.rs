//! doc-version-cleaner - keep only the latest version of an SSM document
//!
//! End-to-end test runs publish a new version of an AWS Systems Manager
//! document each time. This tool collapses the document back to a single
//! version between runs.
//!
//! # Features
//!
//! - Promote the highest-numbered version to the document default
//! - Delete every other version, stopping at the first failure
//! - Dry run mode to preview the changes
//! - List versions with the default and latest marked
//! - Table or JSON output
//!
//! # Example
//!
//! ```bash
//! # Clean the default e2e document
//! doc-version-cleaner clean
//!
//! # Preview cleanup of another document
//! doc-version-cleaner clean my-document --dry-run
//!
//! # List versions as JSON
//! doc-version-cleaner list my-document -o json
//! ```

pub mod cleaner;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod ssm;
pub mod ui;

pub use cleaner::{CleanerConfig, CleanupReport, VersionCleaner};
pub use cli::{CleanArgs, Cli, Command, ListArgs, OutputFormat};
pub use error::{CleanerError, Result};
pub use ssm::{
    run_clean_command, run_list_command, ClientOptions, DocumentStore, DocumentVersion,
    SsmClient, VersionRecord,
};
