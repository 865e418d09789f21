//! protowalk CLI
//!
//! Walks a Protocol Buffers schema AST (encoded as JSON) and reports what it
//! finds.

mod commands;
mod config;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::Result;
use protowalk_ast::VisiteeKind;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};

/// protowalk - Walk and inspect Protocol Buffers schema ASTs
#[derive(Parser)]
#[command(name = "protowalk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides the configuration file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print an indented outline of every element
    Outline {
        /// AST file (JSON)
        file: PathBuf,
    },

    /// List elements of the given kinds
    List {
        /// AST file (JSON)
        file: PathBuf,

        /// Element kinds to list (repeatable; all kinds when omitted)
        #[arg(short, long = "kind", value_parser = parse_kind)]
        kinds: Vec<VisiteeKind>,
    },

    /// Count schema elements by kind
    Stats {
        /// AST file (JSON)
        file: PathBuf,
    },
}

fn parse_kind(value: &str) -> Result<VisiteeKind, String> {
    value.parse()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.format = format;
    }

    match cli.command {
        Commands::Outline { file } => commands::outline::run_outline(&file, &config),
        Commands::List { file, kinds } => {
            if !kinds.is_empty() {
                config.kinds = kinds;
            }
            commands::list::run_list(&file, &config)
        }
        Commands::Stats { file } => commands::stats::run_stats(&file, &config),
    }
}
