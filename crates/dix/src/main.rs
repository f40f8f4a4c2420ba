//! dix - Decision Intelligence CLI
//!
//! Uploads transaction data to the decision service and renders the
//! generated insights as filterable cards in the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod config;
mod render;

use cli::{Cli, Commands};
use commands::generate::Trigger;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("dix=info".parse()?))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = config::Config::load()?;

    // Execute command
    match cli.command {
        Commands::Upload { file, output } => {
            commands::generate::execute(Trigger::File(file), &output, &config).await
        }
        Commands::Generate { output } => {
            commands::generate::execute(Trigger::Cache, &output, &config).await
        }
        Commands::Version => {
            println!("dix {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
