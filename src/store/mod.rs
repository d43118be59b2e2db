//! Snapshot store
//!
//! Naming and persistence for snapshot files. Each scan produces one
//! timestamped JSON document whose name embeds the flattened scan
//! root, so repeated scans of the same directory never collide.

pub mod persistence;

pub use persistence::{read_snapshot, write_snapshot};

use crate::tree::path::flatten_path;
use chrono::Local;

/// File name for a new snapshot of `root`.
///
/// The name is `dirs_` followed by the flattened root path and a
/// microsecond-resolution local timestamp, ending in `.json`.
pub fn snapshot_file_name(root: &str) -> String {
    let stamp = Local::now().format("%Y.%m.%d-%H.%M.%S.%6f");
    format!("dirs_{}{}.json", flatten_path(root), stamp)
}
