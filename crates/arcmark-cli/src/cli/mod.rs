//! CLI for the arcmark converter.

mod commands;

use anyhow::Result;
use arcmark_core::config;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_convert, run_inspect, ConvertArgs};

/// Top-level CLI for arcmark.
#[derive(Debug, Parser)]
#[command(name = "arcmark")]
#[command(about = "arcmark: convert the Arc sidebar into a Netscape bookmark file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a sidebar export into a bookmark HTML file.
    Convert {
        /// Sidebar export (StorableSidebar.json). Defaults to config, then Arc's location.
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Output HTML file. Defaults to config `output_path`.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Entity-escape titles and URLs.
        #[arg(long)]
        escape_html: bool,

        /// Document title written to <TITLE> and <H1>.
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,
    },

    /// Print the normalized bookmark tree as JSON.
    Inspect {
        /// Sidebar export (StorableSidebar.json). Defaults to config, then Arc's location.
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Convert {
                input,
                output,
                escape_html,
                title,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let args = ConvertArgs::resolve(&cfg, input, output, escape_html, title)?;
                run_convert(&args)
            }
            CliCommand::Inspect { input } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let input = match input {
                    Some(path) => path,
                    None => cfg.resolve_input()?,
                };
                run_inspect(&input)
            }
        }
    }
}
