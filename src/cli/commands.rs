//! Subcommand definitions and arguments

use clap::{Parser, Subcommand};

use crate::config::{defaults, env};

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Make the latest version the default and delete all others
    ///
    /// PROCEDURE:
    ///   1. Lists every version of the document
    ///   2. Parses each version identifier as an integer
    ///   3. Sets the highest version as the document default
    ///   4. Deletes every other version, one at a time
    ///
    /// The first failure stops the run with a non-zero exit status.
    /// Versions already deleted stay deleted.
    #[command(verbatim_doc_comment)]
    Clean(CleanArgs),

    /// List versions of a document (read-only)
    #[command(visible_alias = "ls")]
    List(ListArgs),
}

/// Arguments for 'clean' subcommand
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// SSM document name
    #[arg(env = env::DOCUMENT_NAME, default_value = defaults::DOCUMENT_NAME)]
    pub document: String,

    /// Show what would change without updating or deleting anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Arguments for 'list' subcommand
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// SSM document name
    #[arg(env = env::DOCUMENT_NAME, default_value = defaults::DOCUMENT_NAME)]
    pub document: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_clean_with_document() {
        let cli = TestCli::parse_from(["test", "clean", "my-doc", "--dry-run"]);
        match cli.command {
            Command::Clean(args) => {
                assert_eq!(args.document, "my-doc");
                assert!(args.dry_run);
            }
            _ => panic!("Expected Clean"),
        }
    }

    #[test]
    fn test_clean_dry_run_off_by_default() {
        let cli = TestCli::parse_from(["test", "clean", "my-doc"]);
        match cli.command {
            Command::Clean(args) => assert!(!args.dry_run),
            _ => panic!("Expected Clean"),
        }
    }

    #[test]
    fn test_list_alias() {
        let cli = TestCli::parse_from(["test", "ls", "other-doc"]);
        match cli.command {
            Command::List(args) => assert_eq!(args.document, "other-doc"),
            _ => panic!("Expected List"),
        }
    }
}
