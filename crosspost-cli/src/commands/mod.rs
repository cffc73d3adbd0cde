//! CLI command implementations

use clap::Subcommand;
use crosspost_core::MarkerStyle;

use crate::error::CliResult;

pub mod convert;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert Weibo text for cross-posting
    Convert(convert::ConvertArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(self) -> CliResult<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available paragraph marker styles
    Markers,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(self) -> CliResult<()> {
        match self {
            ListCommands::Formats => {
                println!("text      Chunks separated by a rule line");
                println!("json      JSON array of chunks with character counts");
                println!("markdown  Numbered chunk sections with a summary");
            }
            ListCommands::Markers => {
                for style in MarkerStyle::all() {
                    println!("{}  {}", style.glyph(), marker_name(*style));
                }
            }
        }

        Ok(())
    }
}

/// The `--marker-style` value name for a marker
fn marker_name(style: MarkerStyle) -> &'static str {
    match style {
        MarkerStyle::Arrow => "arrow",
        MarkerStyle::SmallDiamond => "small-diamond",
        MarkerStyle::Blossom => "blossom",
        MarkerStyle::Sparkles => "sparkles",
        MarkerStyle::Diamond => "diamond",
        MarkerStyle::Clover => "clover",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_list_commands_execute() {
        assert!(ListCommands::Formats.execute().is_ok());
        assert!(ListCommands::Markers.execute().is_ok());
    }

    #[test]
    fn test_marker_names_are_distinct() {
        let names: Vec<_> = MarkerStyle::all().iter().map(|s| marker_name(*s)).collect();
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }
}
