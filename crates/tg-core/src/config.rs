//! Configuration types and parsing for trigger-guard.yml

use crate::error::{GuardError, GuardResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default glob, relative to the project directory
pub const DEFAULT_MIGRATIONS_GLOB: &str = "migrations/*.sql";

/// Path segment marking backup copies that must never be touched
pub const DEFAULT_EXCLUDE_MARKER: &str = "duplicates_backup";

/// Number of lines above a `CREATE TRIGGER` searched for an existing guard
pub const DEFAULT_LOOKBACK_LINES: usize = 2;

/// Number of lines after a `CREATE TRIGGER` searched for its `ON` clause
pub const DEFAULT_MAX_LOOKAHEAD: usize = 500;

const CONFIG_FILE_NAMES: [&str; 2] = ["trigger-guard.yml", "trigger-guard.yaml"];

/// Project configuration from trigger-guard.yml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob matching migration files, relative to the project directory
    #[serde(default = "default_migrations_glob")]
    pub migrations_glob: String,

    /// Any path containing one of these substrings is skipped
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Guard detection window above each `CREATE TRIGGER` line
    #[serde(default = "default_lookback_lines")]
    pub lookback_lines: usize,

    /// Forward scan bound when looking for the `ON <table>` clause
    #[serde(default = "default_max_lookahead")]
    pub max_lookahead: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            migrations_glob: default_migrations_glob(),
            exclude: default_exclude(),
            lookback_lines: default_lookback_lines(),
            max_lookahead: default_max_lookahead(),
        }
    }
}

fn default_migrations_glob() -> String {
    DEFAULT_MIGRATIONS_GLOB.to_string()
}

fn default_exclude() -> Vec<String> {
    vec![DEFAULT_EXCLUDE_MARKER.to_string()]
}

fn default_lookback_lines() -> usize {
    DEFAULT_LOOKBACK_LINES
}

fn default_max_lookahead() -> usize {
    DEFAULT_MAX_LOOKAHEAD
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> GuardResult<Self> {
        if !path.exists() {
            return Err(GuardError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| GuardError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config =
            serde_yaml::from_str(&content).map_err(|e| GuardError::ConfigParse {
                path: path.display().to_string(),
                source: e,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory.
    ///
    /// Looks for trigger-guard.yml or trigger-guard.yaml and falls back to
    /// the defaults when neither exists.
    pub fn load_from_dir(dir: &Path) -> GuardResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Locate the config file in a project directory, if any
    pub fn find_in_dir(dir: &Path) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    pub fn validate(&self) -> GuardResult<()> {
        if self.migrations_glob.trim().is_empty() {
            return Err(GuardError::ConfigInvalid {
                message: "migrations_glob cannot be empty".to_string(),
            });
        }

        if self.lookback_lines == 0 {
            return Err(GuardError::ConfigInvalid {
                message: "lookback_lines must be at least 1".to_string(),
            });
        }

        if self.max_lookahead == 0 {
            return Err(GuardError::ConfigInvalid {
                message: "max_lookahead must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Check whether a path falls under one of the excluded markers
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.exclude
            .iter()
            .any(|marker| !marker.is_empty() && path.contains(marker.as_str()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
