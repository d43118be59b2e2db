//! Depth-bounded filesystem walker
//!
//! Walks a directory subtree with lstat semantics, folding the
//! allocated size of every entry into its parent. `max_depth` bounds
//! how many levels of structure are retained as children; entries
//! below the cutoff still contribute their sizes to the nearest
//! retained ancestor.

use crate::error::SnapshotError;
use crate::tree::node::{FileKind, SnapshotNode};
use crate::tree::path::join_path;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Recursive directory walker.
pub struct Walker {
    root: String,
    max_depth: u32,
}

impl Walker {
    /// Create a walker for the given root path.
    pub fn new(root: impl Into<String>, max_depth: u32) -> Self {
        Self {
            root: root.into(),
            max_depth,
        }
    }

    /// Scan the subtree under the root.
    ///
    /// Fails only when the root itself cannot be classified. Anything
    /// unreadable below the root is logged and skipped, so a partially
    /// readable tree still produces a snapshot.
    pub fn scan(&self) -> Result<SnapshotNode, SnapshotError> {
        let mut root = SnapshotNode::resolve(self.root.as_str());
        if root.kind == FileKind::Unknown {
            return Err(SnapshotError::RootUnavailable(self.root.clone()));
        }
        if root.kind == FileKind::Directory {
            self.walk(&mut root, Path::new(&self.root), self.max_depth);
        }
        debug!(root = %root.path, size = root.size, "scan complete");
        Ok(root)
    }

    // `dir` is the on-disk location of `node`; the two diverge once a
    // name on the way down was not valid UTF-8, so all filesystem
    // access goes through `dir` while `node.path` is display-only.
    fn walk(&self, node: &mut SnapshotNode, dir: &Path, depth_budget: u32) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                warn!(path = %node.path, %error, "cannot open directory, skipping contents");
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(path = %node.path, %error, "unreadable directory entry, skipping");
                    continue;
                }
            };

            let name = entry.file_name();
            let disk_path = entry.path();
            let mut child = SnapshotNode::resolve_at(
                &disk_path,
                join_path(&node.path, &name.to_string_lossy()),
            );
            if child.kind == FileKind::Unknown {
                continue;
            }
            if child.kind == FileKind::Directory {
                self.walk(&mut child, &disk_path, depth_budget.saturating_sub(1));
            }
            node.size += child.size;
            if depth_budget > 0 {
                node.children.push(child);
            }
        }
    }
}
