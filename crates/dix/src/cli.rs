//! CLI argument definitions using clap derive macros.

use clap::{Args, Parser, Subcommand};
use dix_core::FilterMode;
use std::path::PathBuf;

/// Decision Intelligence CLI
///
/// Transform transaction data into actionable decisions.
#[derive(Parser, Debug)]
#[command(name = "dix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload a transaction CSV and generate decision insights
    Upload {
        /// Path to the CSV file (a .csv extension is expected, not enforced)
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Regenerate insights from data the service already holds
    Generate {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print version information
    Version,
}

/// Flags shared by the two trigger commands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Initial priority filter (all, critical, high, medium, low)
    #[arg(long, default_value = "all")]
    pub priority: FilterMode,

    /// Emit held results as JSON instead of rendering cards
    #[arg(long)]
    pub json: bool,

    /// Render once and exit without the interactive filter prompt
    #[arg(long)]
    pub no_interactive: bool,
}
