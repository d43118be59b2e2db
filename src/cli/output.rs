//! Error-to-message mapping for the command line.

use crate::error::SnapshotError;
use std::io::ErrorKind;

/// Turn a failure into the line shown to the user.
///
/// Most variants print their own display text. A missing snapshot file
/// collapses to one short line naming the path, without the OS error
/// wrapping.
pub fn map_error(e: &SnapshotError) -> String {
    match e {
        SnapshotError::SnapshotIo { path, source } if source.kind() == ErrorKind::NotFound => {
            format!("no such snapshot file: {}", path.display())
        }
        other => other.to_string(),
    }
}
