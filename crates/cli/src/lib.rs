//! Gouzi CLI library
//!
//! This library contains all the CLI logic for gouzi, making it reusable
//! for testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// Default manifest file name looked up in the project directory
pub const DEFAULT_MANIFEST: &str = "gouzi.toml";

/// Gouzi - declarative git hook manager
#[derive(Parser)]
#[command(name = "gouzi")]
#[command(about = "Manage your git hooks with gouzi (钩子)")]
#[command(version)]
#[command(long_about = "Manage your git hooks with gouzi (钩子)

Describe hooks declaratively in gouzi.toml or on the command line, and
gouzi materializes them as executable scripts in .git/hooks.

Examples:
  • gouzi install
      → Install every hook declared in gouzi.toml

  • gouzi install pre-commit --run ./run-tests --interpreter bash
      → Install a pre-commit hook from flags

  • gouzi install pre-push --file scripts/pre-push.sh
      → Install a hook from an existing script, byte-for-byte

  • gouzi remove pre-commit
      → Delete the installed pre-commit hook

  • gouzi review
      → Show repository and installed-hook status")]
pub struct Cli {
    /// Project directory to start the repository search from
    #[arg(long, env = "GOUZI_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Path to the hook manifest
    #[arg(long, env = "GOUZI_MANIFEST", value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "GOUZI_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the gouzi CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Install hooks from the manifest or from flags
    Install(cmd::install::InstallCommand),

    /// Remove an installed hook
    Remove(cmd::remove::RemoveCommand),

    /// Show repository and installed-hook status
    Review(cmd::review::ReviewCommand),
}

/// Resolve the project directory and manifest path from flags and defaults
fn resolve_context(cli: &Cli) -> Result<RuntimeContext> {
    let project_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let manifest_path = cli
        .manifest
        .clone()
        .unwrap_or_else(|| project_dir.join(DEFAULT_MANIFEST));
    Ok(RuntimeContext::new(project_dir, manifest_path))
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - The project directory cannot be determined
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    let context = resolve_context(&cli)?;

    match cli.command {
        Commands::Install(install_cmd) => {
            install_cmd.execute(&context)?;
        }
        Commands::Remove(remove_cmd) => {
            remove_cmd.execute(&context)?;
        }
        Commands::Review(review_cmd) => {
            review_cmd.execute(&context)?;
        }
    }

    Ok(())
}
