//! CLI argument parsing

mod commands;
mod enums;

use clap::Parser;

use crate::config::{defaults, env};
use crate::ssm::ClientOptions;

pub use commands::{CleanArgs, Command, ListArgs};
pub use enums::OutputFormat;

/// Document version cleaner CLI
#[derive(Parser, Debug)]
#[command(name = "doc-version-cleaner")]
#[command(version)]
#[command(
    about = "Keep only the latest version of an SSM document",
    long_about = "Keep only the latest version of an AWS Systems Manager document.\n\n\
                  The highest-numbered version becomes the default and every other \
                  version is deleted. Any failure stops the run immediately."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// AWS region (falls back to the shared AWS config)
    #[arg(long, global = true, env = env::REGION)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files
    #[arg(long, global = true, env = env::PROFILE)]
    pub profile: Option<String>,

    /// Custom SSM endpoint URL (e.g., a local stack)
    #[arg(long, global = true, env = env::ENDPOINT_URL)]
    pub endpoint_url: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Batch mode - no spinners
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,
}

impl Cli {
    /// Client overrides from the global flags
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}
