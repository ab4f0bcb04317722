//! Error types for Deblog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using DeblogError
pub type Result<T> = std::result::Result<T, DeblogError>;

/// Main error type for Deblog operations
#[derive(Debug, Error)]
pub enum DeblogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// History-extraction errors
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Changelog output errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Failed to parse version
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, String),

    /// Invalid version format
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    /// Semver error
    #[error("Semver error: {0}")]
    Semver(#[from] semver::Error),
}

/// History-extraction errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The external log command exited with an error status
    #[error("Command failed: {command} - {reason}")]
    CommandFailed { command: String, reason: String },

    /// IO error spawning or reading the log command
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog output errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to write an output file
    #[error("Failed to write changelog: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeblogError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
