//! Persistence for snapshot trees
//!
//! Snapshots are stored as pretty-printed JSON documents, one tree per
//! file, so they stay inspectable with standard tooling.

use crate::error::SnapshotError;
use crate::tree::node::SnapshotNode;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write a snapshot tree to `path` as pretty-printed JSON.
pub fn write_snapshot(path: &Path, root: &SnapshotNode) -> Result<(), SnapshotError> {
    let file = File::create(path).map_err(|source| SnapshotError::SnapshotIo {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, root).map_err(|source| {
        SnapshotError::SnapshotWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(|source| SnapshotError::SnapshotIo {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "snapshot written");
    Ok(())
}

/// Read a snapshot tree back from `path`.
///
/// Loading is lenient about record contents, but the document must be
/// a JSON object at the top level. Parsing runs under serde_json's
/// recursion limit of 128 JSON levels, two per tree level, so a tree
/// deeper than about 64 levels can be written but not read back; that
/// surfaces as a parse error on the read side.
pub fn read_snapshot(path: &Path) -> Result<SnapshotNode, SnapshotError> {
    let file = File::open(path).map_err(|source| SnapshotError::SnapshotIo {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| SnapshotError::SnapshotParse {
        path: path.to_path_buf(),
        source,
    })
}
