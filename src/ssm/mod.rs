//! SSM API client module
//!
//! This module provides functionality to interact with the AWS Systems
//! Manager document API.

mod client;
pub mod documents;
pub mod traits;

pub use client::{ClientOptions, SsmClient};
pub use documents::{run_clean_command, run_list_command, DocumentVersion, VersionRecord};
pub use traits::DocumentStore;
