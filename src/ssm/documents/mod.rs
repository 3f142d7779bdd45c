//! Documents module - list, promote and delete SSM document versions

mod api;
mod commands;
mod models;

pub use commands::{run_clean_command, run_list_command};
pub use models::{parse_versions, select_latest, DocumentVersion, VersionRecord};
