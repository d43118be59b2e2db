//! Error types for the disk usage snapshot system.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from scanning, snapshot persistence, and configuration.
///
/// Unreadable entries below a scan root are logged and skipped rather
/// than surfaced here; these variants cover the failures that abort a
/// command.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Cannot stat scan root: {0}")]
    RootUnavailable(String),

    #[error("Snapshot file I/O failed for {path}: {source}")]
    SnapshotIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot parse snapshot {path}: {source}")]
    SnapshotParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cannot write snapshot {path}: {source}")]
    SnapshotWrite {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for SnapshotError {
    fn from(err: config::ConfigError) -> Self {
        SnapshotError::ConfigError(err.to_string())
    }
}
