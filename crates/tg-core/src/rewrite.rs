//! Per-file rewrite pass inserting guards ahead of `CREATE TRIGGER`

use crate::config::Config;
use crate::error::GuardResult;
use crate::guard::DropGuardInjector;
use crate::parser::TriggerStatementParser;
use crate::source_file::SourceFile;
use std::path::{Path, PathBuf};

/// Counters collected during one rewrite pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// `CREATE TRIGGER` lines that yielded a declaration
    pub triggers_found: usize,

    /// Guards inserted into the output
    pub guards_inserted: usize,

    /// `CREATE TRIGGER` lines left alone because no declaration could be extracted
    pub statements_skipped: usize,
}

/// Output of one rewrite pass.
///
/// When `changed` is false `lines` equals the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
    /// Whether at least one guard was inserted
    pub changed: bool,

    /// Output lines with guards interleaved, terminators included
    pub lines: Vec<String>,

    /// Counters for this pass
    pub stats: RewriteStats,
}

/// Result of processing one migration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File that was processed
    pub path: PathBuf,

    /// Whether the file needed guards (and was rewritten, unless in check mode)
    pub changed: bool,

    /// Counters from the rewrite pass
    pub stats: RewriteStats,
}

/// Outcomes of one run over every discovered migration, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// One entry per processed file
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    /// Record the outcome of one file
    pub fn push(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Files that needed guards
    pub fn updated(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.changed)
    }

    /// Number of files that needed guards
    pub fn updated_count(&self) -> usize {
        self.updated().count()
    }

    /// Number of files processed
    pub fn file_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Sum of guards inserted across all files
    pub fn guards_inserted(&self) -> usize {
        self.outcomes.iter().map(|o| o.stats.guards_inserted).sum()
    }
}

/// Walks a file's lines once and interleaves the guards it needs
#[derive(Debug, Clone, Copy, Default)]
pub struct FileRewriter {
    parser: TriggerStatementParser,
    injector: DropGuardInjector,
}

impl FileRewriter {
    /// Create a rewriter from explicit parts
    pub fn new(parser: TriggerStatementParser, injector: DropGuardInjector) -> Self {
        Self { parser, injector }
    }

    /// Create a rewriter using the configured lookback and lookahead bounds
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            TriggerStatementParser::new(config.max_lookahead),
            DropGuardInjector::new(config.lookback_lines),
        )
    }

    /// Rewrite `lines`, leaving the input untouched.
    ///
    /// Every input line is emitted exactly once and in order; guards are the
    /// only lines added. Lookahead performed while searching for an `ON`
    /// clause never advances the walk.
    pub fn rewrite(&self, lines: &[String]) -> RewriteResult {
        let mut output = Vec::with_capacity(lines.len());
        let mut stats = RewriteStats::default();

        for (index, line) in lines.iter().enumerate() {
            if self.parser.is_statement_start(line) {
                match self.parser.parse_at(lines, index) {
                    Some(declaration) => {
                        stats.triggers_found += 1;
                        if let Some(guard) = self.injector.guard_for(lines, index, &declaration) {
                            output.push(guard);
                            stats.guards_inserted += 1;
                        }
                    }
                    None => stats.statements_skipped += 1,
                }
            }
            output.push(line.clone());
        }

        RewriteResult {
            changed: stats.guards_inserted > 0,
            lines: output,
            stats,
        }
    }

    /// Rewrite an in-memory source file
    pub fn rewrite_file(&self, file: &SourceFile) -> RewriteResult {
        self.rewrite(&file.lines)
    }
}

/// Load, rewrite and (when `write` is set and something changed) save one file.
///
/// Unchanged files are never written, so their modification time is kept.
pub fn process_file(path: &Path, rewriter: &FileRewriter, write: bool) -> GuardResult<FileOutcome> {
    let file = SourceFile::load(path)?;
    let result = rewriter.rewrite_file(&file);

    if result.stats.statements_skipped > 0 {
        log::debug!(
            "{}: skipped {} unrecognised CREATE TRIGGER statement(s)",
            path.display(),
            result.stats.statements_skipped
        );
    }

    if result.changed && write {
        SourceFile::write_lines(path, &result.lines)?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        changed: result.changed,
        stats: result.stats,
    })
}

#[cfg(test)]
#[path = "rewrite_test.rs"]
mod tests;
