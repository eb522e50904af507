use std::path::PathBuf;

use thiserror::Error;

use crate::config::CONFIG_FILE_NAME;

/// Unified error type for vrs operations
#[derive(Error, Debug)]
pub enum VrsError {
    #[error("No {} found in {}", CONFIG_FILE_NAME, .dir.display())]
    NotFound { dir: PathBuf },

    #[error("Failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize version file: {0}")]
    Serialize(#[source] serde_yaml::Error),

    #[error("Malformed version '{version}': {reason}")]
    MalformedVersion { version: String, reason: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Command `{command}` failed: {reason}")]
    CommandFailure { command: String, reason: String },
}

/// Convenience type alias for Results in vrs
pub type Result<T> = std::result::Result<T, VrsError>;

impl VrsError {
    /// Create a malformed version error with context
    pub fn malformed(version: impl Into<String>, reason: impl Into<String>) -> Self {
        VrsError::MalformedVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create a command failure for an external command line
    pub fn command(command: impl Into<String>, reason: impl Into<String>) -> Self {
        VrsError::CommandFailure {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// True when the base directory has no version file yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, VrsError::NotFound { .. })
    }
}
