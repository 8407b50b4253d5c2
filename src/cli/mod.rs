//! act-tool CLI - Command-line interface for ACT animation files

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "act-tool")]
#[command(about = "act-tool: inspect and rewrite ACT sprite animations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the act-tool CLI
///
/// # Errors
/// Returns an error if the selected command fails.
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
