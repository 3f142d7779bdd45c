//! doc-version-cleaner - main entry point

use clap::Parser;
use log::{debug, error};

use doc_version_cleaner::{run_clean_command, run_list_command, Cli, Command, Result, SsmClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    debug!("Starting doc-version-cleaner v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let options = cli.client_options();
    debug!("Client options: {:?}", options);
    let client = SsmClient::from_options(&options).await?;

    match &cli.command {
        Command::Clean(args) => run_clean_command(&client, cli, args).await,
        Command::List(args) => run_list_command(&client, cli, args).await,
    }
}
