//! Rundeck CLI - Command-line interface for the Rundeck HTTP API

use anyhow::Result;
use clap::Parser;
use rundeck_cli::cli::Cli;
use rundeck_cli::{commands, config, logging, CommandContext, OutputFormatter};
use rundeck_sdk::RundeckClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init();

    let client_config = config::load(&cli.global.config_overrides())?;
    let client = RundeckClient::new(client_config)?;
    let output = OutputFormatter::new(cli.global.output, std::io::stdout().lock());

    let mut ctx = CommandContext::new(client, output);
    commands::dispatch(&mut ctx, cli.command).await
}
