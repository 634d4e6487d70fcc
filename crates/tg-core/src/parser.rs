//! Detection of `CREATE TRIGGER <name> ON <table>` statements
//!
//! This is deliberately a line-based pattern matcher rather than a SQL
//! parser. Only the `CREATE TRIGGER <name> ON <table>` shape is recognised;
//! anything with extra syntax between the trigger name and `ON` (timing
//! keywords, events, `OR REPLACE`) yields no declaration and is left alone.

use crate::config::DEFAULT_MAX_LOOKAHEAD;
use regex::Regex;
use std::sync::OnceLock;

/// Trigger name and target table extracted from one statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerDeclaration {
    /// Trigger identifier as written in the statement
    pub trigger_name: String,

    /// Table identifier following `ON`
    pub table_name: String,
}

fn statement_start_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^\s*CREATE\s+TRIGGER\s+").expect("valid regex literal"))
}

fn on_clause_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\s+ON\s+\w+").expect("valid regex literal"))
}

fn declaration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)CREATE\s+TRIGGER\s+(\w+)\s+ON\s+(\w+)").expect("valid regex literal")
    })
}

/// Extracts [`TriggerDeclaration`]s from a file's lines
#[derive(Debug, Clone, Copy)]
pub struct TriggerStatementParser {
    max_lookahead: usize,
}

impl Default for TriggerStatementParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOOKAHEAD)
    }
}

impl TriggerStatementParser {
    /// Create a parser that probes at most `max_lookahead` lines past the
    /// `CREATE TRIGGER` line when searching for the `ON` clause
    pub fn new(max_lookahead: usize) -> Self {
        Self { max_lookahead }
    }

    /// Whether `line` begins a `CREATE TRIGGER` statement
    pub fn is_statement_start(&self, line: &str) -> bool {
        statement_start_regex().is_match(line)
    }

    /// Parse the statement starting at `index`.
    ///
    /// Returns `None` when the line does not start a statement, when no
    /// `ON <table>` clause appears within the lookahead bound, or when the
    /// accumulated text does not have the expected shape. `lines` is only
    /// read; the caller still visits every following line itself.
    pub fn parse_at(&self, lines: &[String], index: usize) -> Option<TriggerDeclaration> {
        let first = lines.get(index)?;
        if !self.is_statement_start(first) {
            return None;
        }

        let mut statement = first.trim().to_string();
        let mut next = index + 1;
        let limit = index.saturating_add(self.max_lookahead);
        while !on_clause_regex().is_match(&statement) && next < lines.len() {
            if next > limit {
                log::warn!(
                    "No ON clause within {} lines of CREATE TRIGGER at line {}; skipping",
                    self.max_lookahead,
                    index + 1
                );
                return None;
            }
            statement.push(' ');
            statement.push_str(lines[next].trim());
            next += 1;
        }

        let Some(captures) = declaration_regex().captures(&statement) else {
            log::debug!(
                "Unrecognised CREATE TRIGGER shape at line {}: {}",
                index + 1,
                statement
            );
            return None;
        };

        Some(TriggerDeclaration {
            trigger_name: captures[1].to_string(),
            table_name: captures[2].to_string(),
        })
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
