//! TrayDrop CLI - headless upload sessions, glyph rendering and history

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "traydrop-cli")]
#[command(about = "TrayDrop: drop-zone uploader, headless", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the TrayDrop CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging (stderr, stdout carries host events)
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
