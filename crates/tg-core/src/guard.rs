//! `DROP TRIGGER IF EXISTS` guard detection and generation

use crate::config::DEFAULT_LOOKBACK_LINES;
use crate::parser::TriggerDeclaration;
use crate::source_file::line_terminator;
use regex::Regex;
use std::sync::OnceLock;

fn existing_guard_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)DROP\s+TRIGGER\s+IF\s+EXISTS\s+"?(\w+)"#).expect("valid regex literal")
    })
}

/// Decides whether a `CREATE TRIGGER` needs a guard and builds it
#[derive(Debug, Clone, Copy)]
pub struct DropGuardInjector {
    lookback_lines: usize,
}

impl Default for DropGuardInjector {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK_LINES)
    }
}

impl DropGuardInjector {
    /// Create an injector that searches `lookback_lines` lines above each
    /// `CREATE TRIGGER` for an existing guard
    pub fn new(lookback_lines: usize) -> Self {
        Self { lookback_lines }
    }

    /// Whether a guard for `trigger_name` already sits within the lookback
    /// window directly above `index`.
    ///
    /// This is a textual match on the guarded name, optionally double-quoted
    /// and compared case-insensitively. A guard further up than the window is
    /// not seen.
    pub fn has_existing_guard(&self, lines: &[String], index: usize, trigger_name: &str) -> bool {
        let wanted = trigger_name.to_lowercase();
        let start = index.saturating_sub(self.lookback_lines);
        let end = index.min(lines.len());
        lines[start.min(end)..end].iter().any(|line| {
            existing_guard_regex()
                .captures_iter(line)
                .any(|captures| captures[1].to_lowercase() == wanted)
        })
    }

    /// Render the guard statement for `declaration`, ending with `terminator`
    pub fn guard_line(declaration: &TriggerDeclaration, terminator: &str) -> String {
        format!(
            "DROP TRIGGER IF EXISTS \"{}\" ON {};{}",
            declaration.trigger_name, declaration.table_name, terminator
        )
    }

    /// The guard to insert before the `CREATE TRIGGER` at `index`, if one is
    /// needed. The guard reuses that line's terminator, defaulting to `\n`.
    pub fn guard_for(
        &self,
        lines: &[String],
        index: usize,
        declaration: &TriggerDeclaration,
    ) -> Option<String> {
        if self.has_existing_guard(lines, index, &declaration.trigger_name) {
            return None;
        }

        let terminator = match lines.get(index).map(|line| line_terminator(line)) {
            Some("\r\n") => "\r\n",
            _ => "\n",
        };
        Some(Self::guard_line(declaration, terminator))
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
