//! Migration file discovery

use crate::config::Config;
use crate::error::{GuardError, GuardResult};
use std::path::{Path, PathBuf};

/// Find the migration files under `base_dir` that match the configured glob.
///
/// Paths containing an excluded marker are dropped before anything reads
/// them. Markers are matched against the path relative to `base_dir`, so a
/// project living under a directory that happens to contain a marker is
/// still processed. The result is sorted lexicographically.
pub fn discover_migrations(base_dir: &Path, config: &Config) -> GuardResult<Vec<PathBuf>> {
    let discovery_error = |reason: String| GuardError::Discovery {
        path: base_dir.display().to_string(),
        reason,
    };

    // Surfaces permission problems that glob would otherwise swallow
    std::fs::read_dir(base_dir).map_err(|e| discovery_error(e.to_string()))?;

    let escaped_base = glob::Pattern::escape(&base_dir.to_string_lossy());
    let pattern = Path::new(&escaped_base).join(&config.migrations_glob);
    let pattern = pattern.to_string_lossy();

    let entries = glob::glob(&pattern)
        .map_err(|e| discovery_error(format!("invalid glob '{}': {}", pattern, e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| discovery_error(e.to_string()))?;
        if !path.is_file() {
            continue;
        }
        let relative = path.strip_prefix(base_dir).unwrap_or(&path);
        if config.is_excluded(relative) {
            log::debug!("Skipping excluded migration {}", path.display());
            continue;
        }
        files.push(path);
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
