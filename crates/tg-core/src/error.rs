//! Error types for tg-core

use thiserror::Error;

/// Core error type for trigger-guard
#[derive(Error, Debug)]
pub enum GuardError {
    /// TG001: Configuration file not found
    #[error("[TG001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// TG002: Failed to parse configuration file
    #[error("[TG002] Failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_yaml::Error,
    },

    /// TG003: Invalid configuration value
    #[error("[TG003] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// TG004: Migration directory could not be scanned
    #[error("[TG004] Failed to discover migrations under '{path}': {reason}")]
    Discovery { path: String, reason: String },

    /// TG005: Migration file could not be read
    #[error("[TG005] Failed to read '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// TG006: Migration file could not be written
    #[error("[TG006] Failed to write '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for GuardError
pub type GuardResult<T> = Result<T, GuardError>;
