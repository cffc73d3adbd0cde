//! crosspost binary entry point

use anyhow::Result;
use clap::Parser;
use crosspost_cli::commands::Commands;

/// Convert Weibo posts for cross-posting to other platforms
#[derive(Debug, Parser)]
#[command(name = "crosspost", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
