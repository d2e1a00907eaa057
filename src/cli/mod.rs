//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::render::RenderFormat;
use crate::{Config, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// State transition table parser
#[derive(Parser, Debug)]
#[command(name = "sttp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (overrides config; RUST_LOG overrides both)
    #[arg(long, global = true, env = "STTP_LOG")]
    pub log_level: Option<String>,

    /// State transition table (.csv is appended if missing)
    pub stt_file: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the JSON representation of the state machine
    Jsonify,

    /// Print the DOT language source of the state machine
    Dotify,

    /// Print the state machine as a source -> dest -> trigger mapping
    Dictify,

    /// Render the state machine graph with Graphviz
    Visualize {
        /// Output file (the format extension is added if missing)
        filename: PathBuf,

        /// Output format [default: from config, else pdf]
        #[arg(short, long, value_enum)]
        format: Option<RenderFormat>,

        /// Open the rendered file
        #[arg(long)]
        view: bool,
    },

    /// Print a summary of the state machine's shape
    Stats,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    let table = commands::load_table(&args.stt_file, &config)?;
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Commands::Jsonify => commands::jsonify::execute(&table, &mut stdout),
        Commands::Dotify => commands::dotify::execute(&table, &mut stdout),
        Commands::Dictify => commands::dictify::execute(&table, &mut stdout),
        Commands::Visualize {
            filename,
            format,
            view,
        } => {
            let format = format.unwrap_or(config.render.format);
            let view = view || config.render.view;
            commands::visualize::execute(&table, &filename, format, view, &config)
        }
        Commands::Stats => commands::stats::execute(&table, &mut stdout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["sttp", "lights.csv", "jsonify"]).unwrap();
        assert_eq!(cli.stt_file, PathBuf::from("lights.csv"));
        assert!(matches!(cli.command, Commands::Jsonify));
    }

    #[test]
    fn test_visualize_parsing() {
        let cli = Cli::try_parse_from([
            "sttp",
            "lights",
            "visualize",
            "out/lights",
            "--format",
            "svg",
            "--view",
        ])
        .unwrap();

        match cli.command {
            Commands::Visualize {
                filename,
                format,
                view,
            } => {
                assert_eq!(filename, PathBuf::from("out/lights"));
                assert_eq!(format, Some(RenderFormat::Svg));
                assert!(view);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let cli = Cli::try_parse_from(["sttp", "t", "visualize", "out", "--format", "docx"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_missing_subcommand_rejected() {
        assert!(Cli::try_parse_from(["sttp", "t.csv"]).is_err());
    }
}
