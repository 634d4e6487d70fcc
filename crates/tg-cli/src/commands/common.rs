//! Shared helpers for the apply and check commands

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;
use tg_core::{discover_migrations, process_file, Config, FileRewriter, RunReport};

use crate::cli::{GlobalArgs, GuardArgs};

/// Non-zero exit without an error message.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Control flow only; main exits with the code and prints nothing
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Resolve configuration: explicit `--config`, else the project directory's
/// config file, else defaults. Command-line overrides are applied last.
pub(crate) fn load_config(args: &GuardArgs, global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(path)?,
        None => Config::load_from_dir(&global.project_dir)?,
    };

    if let Some(glob) = &args.glob {
        config.migrations_glob = glob.clone();
    }
    if !args.exclude.is_empty() {
        config.exclude = args.exclude.clone();
    }
    if let Some(lookback) = args.lookback_lines {
        config.lookback_lines = lookback;
    }
    if let Some(lookahead) = args.max_lookahead {
        config.max_lookahead = lookahead;
    }

    config.validate().context("Invalid command-line override")?;
    Ok(config)
}

/// Discover and process every migration, stopping at the first I/O failure.
pub(crate) fn scan_migrations(
    args: &GuardArgs,
    global: &GlobalArgs,
    write: bool,
) -> Result<RunReport> {
    let config = load_config(args, global)?;
    let files = discover_migrations(&global.project_dir, &config)?;

    if global.verbose {
        eprintln!(
            "[verbose] Scanning {} migration files (glob={}, lookback={}, lookahead={})",
            files.len(),
            config.migrations_glob,
            config.lookback_lines,
            config.max_lookahead,
        );
    }

    let rewriter = FileRewriter::from_config(&config);
    let mut report = RunReport::default();
    for path in &files {
        let outcome = process_file(path, &rewriter, write)?;
        if global.verbose {
            eprintln!(
                "[verbose] {}: {} trigger(s), {} guard(s) needed, {} skipped",
                display_path(&outcome.path).display(),
                outcome.stats.triggers_found,
                outcome.stats.guards_inserted,
                outcome.stats.statements_skipped,
            );
        }
        report.push(outcome);
    }

    log::debug!(
        "Processed {} migration files, {} guard(s) needed",
        report.file_count(),
        report.guards_inserted()
    );
    Ok(report)
}

/// Strip a leading `./` so reported paths read like the glob that found them
pub(crate) fn display_path(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}
