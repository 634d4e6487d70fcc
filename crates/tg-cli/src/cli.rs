//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// trigger-guard - make CREATE TRIGGER migrations safe to re-run
#[derive(Parser, Debug)]
#[command(name = "trigger-guard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing the migrations folder
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Config file path (default: trigger-guard.yml in the project directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert DROP TRIGGER IF EXISTS guards and rewrite migrations in place
    Apply(GuardArgs),

    /// Report migrations that need guards without writing; exits 1 if any do
    Check(GuardArgs),
}

/// Options shared by apply and check
#[derive(Args, Debug, Clone, Default)]
pub struct GuardArgs {
    /// Glob of migration files relative to the project directory
    #[arg(short, long)]
    pub glob: Option<String>,

    /// Skip paths containing this marker (repeatable, replaces configured markers)
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Lines above CREATE TRIGGER searched for an existing guard
    #[arg(long)]
    pub lookback_lines: Option<usize>,

    /// Lines after CREATE TRIGGER searched for the ON clause
    #[arg(long)]
    pub max_lookahead: Option<usize>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
