//! Menshen CLI library
//!
//! This library contains all the CLI logic for menshen, making it reusable
//! for testing and integration with other tools.

pub mod cmd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use menshen_config::{PackageManifest, Settings};
use std::path::PathBuf;

/// Menshen - a pre-commit command runner inspired by lint-staged
#[derive(Parser)]
#[command(name = "menshen")]
#[command(about = "Run configured commands against staged files with menshen (门神)")]
#[command(version)]
#[command(long_about = "Run configured commands against staged files with menshen (门神)

A fast pre-commit command runner written in Rust.
Inspired by lint-staged, designed for exact argument control.

Features:
  • Package script detection via package.json
  • Placeholder templates for per-file arguments
  • Chunked invocations for large file lists
  • Git integration for staged-file discovery")]
pub struct Cli {
    /// Directory to start repository discovery from (default: current directory)
    #[arg(long, env = "MENSHEN_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs, drops the runner's quiet flag)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "MENSHEN_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the menshen CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run the configured commands against staged files
    #[command(long_about = "Run the configured commands against staged files

Discovers the enclosing git repository, loads the command list from
menshen.toml or the \"menshen\" key of package.json, builds one task per
entry and executes them in order. The exit code is non-zero when any
task fails.

Examples:
  • menshen run
      → Run every configured command against the staged files

  • menshen run --all
      → Run against all tracked files instead

  • menshen run --concurrent
      → Run independent commands in parallel

  • menshen run --chunk-size 50
      → Cap each invocation at 50 file arguments")]
    Run {
        /// Run independent commands in parallel
        #[arg(short, long)]
        concurrent: bool,

        /// Run against all tracked files instead of the staged set
        #[arg(short, long)]
        all: bool,

        /// Maximum number of file arguments per invocation
        #[arg(long, value_name = "N")]
        chunk_size: Option<usize>,
    },

    /// Show the configured commands and how they resolve, without running them
    List {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text", value_name = "FORMAT")]
        format: String,
    },
}

/// Parse global options, load the repository's configuration and dispatch
/// to the selected subcommand.
///
/// # Errors
///
/// Returns an error when logging cannot be initialized, when no git
/// repository encloses the starting directory, when the configuration is
/// missing or malformed, or when the subcommand itself fails.
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    menshen_config::logging::init(cli.verbose, cli.log_file.as_deref())?;

    let start = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine the current directory")?,
    };
    let repo_root = menshen_engine::git::find_working_tree(&start)
        .with_context(|| format!("No git repository found at or above {}", start.display()))?;
    tracing::debug!("Repository root: {}", repo_root.display());

    let manifest = PackageManifest::load(&repo_root)?;
    let settings = Settings::discover(&repo_root, &manifest)?;

    // A bare `menshen` behaves as `menshen run`
    let command = cli.command.unwrap_or(Commands::Run {
        concurrent: false,
        all: false,
        chunk_size: None,
    });

    match command {
        Commands::Run {
            concurrent,
            all,
            chunk_size,
        } => cmd::run::execute(
            &repo_root,
            &manifest,
            &settings,
            cli.verbose,
            concurrent,
            all,
            chunk_size,
        ),
        Commands::List { format } => {
            cmd::list::execute(&repo_root, &manifest, &settings, cli.verbose, &format)
        }
    }
}
