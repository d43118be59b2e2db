//! Snapshot comparison
//!
//! Compares two snapshot trees of the same root and attributes growth
//! to the most specific paths responsible. Children on both sides are
//! expected to be sorted by path, which loading guarantees, so the
//! comparison is a single merge pass per directory.
//!
//! Records are emitted deepest-first: a directory's own record, when
//! one is needed, follows the records of everything beneath it. A
//! directory whose entire increase is explained by exactly one changed
//! child is not reported itself, keeping the output at one line per
//! independent cause.

use crate::tree::node::{FileKind, SnapshotNode};
use std::cmp::Ordering;

/// What happened to a path between the older and newer snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Present only in the newer snapshot.
    Added,
    /// Present only in the older snapshot.
    Removed,
    /// Present in both and larger in the newer snapshot.
    Grown,
}

/// One reported change.
///
/// `bytes` is the full size for added and removed entries and the
/// size delta for grown ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub path: String,
    pub kind: ChangeKind,
    pub bytes: u64,
}

impl ChangeRecord {
    fn new(path: &str, kind: ChangeKind, bytes: u64) -> Self {
        Self {
            path: path.to_string(),
            kind,
            bytes,
        }
    }
}

/// Compare `newer` against `older` and collect growth records.
///
/// Nothing is reported for a subtree whose newer size is not strictly
/// larger than its older size, even when sizes shifted internally.
pub fn diff(newer: &SnapshotNode, older: &SnapshotNode) -> Vec<ChangeRecord> {
    let mut changes = Vec::new();
    diff_node(newer, older, &mut changes);
    changes
}

fn diff_node(newer: &SnapshotNode, older: &SnapshotNode, changes: &mut Vec<ChangeRecord>) {
    if newer.size <= older.size {
        return;
    }
    let total = newer.size - older.size;

    if newer.kind != FileKind::Directory || older.kind != FileKind::Directory {
        changes.push(ChangeRecord::new(&newer.path, ChangeKind::Grown, total));
        return;
    }

    // Count every changed child and remember the last growth amount.
    // If exactly one child changed and its growth equals the whole
    // directory increase, that child's record already explains this
    // directory and no record is emitted for it.
    let mut change_count = 0usize;
    let mut candidate = 0u64;

    let mut i = 0;
    let mut j = 0;
    while i < newer.children.len() && j < older.children.len() {
        let lhs = &newer.children[i];
        let rhs = &older.children[j];
        match lhs.path.cmp(&rhs.path) {
            Ordering::Equal => {
                diff_node(lhs, rhs, changes);
                i += 1;
                j += 1;
                if lhs.size != rhs.size {
                    change_count += 1;
                }
                if lhs.size > rhs.size {
                    candidate = lhs.size - rhs.size;
                }
            }
            Ordering::Less => {
                i += 1;
                if lhs.size > 0 {
                    changes.push(ChangeRecord::new(&lhs.path, ChangeKind::Added, lhs.size));
                    change_count += 1;
                    candidate = lhs.size;
                }
            }
            Ordering::Greater => {
                j += 1;
                if rhs.size > 0 {
                    changes.push(ChangeRecord::new(&rhs.path, ChangeKind::Removed, rhs.size));
                    change_count += 1;
                }
            }
        }
    }

    // Entries past the end of the older snapshot are all new. Entries
    // past the end of the newer one were deleted, but deletions cannot
    // explain growth and are left out of the report here.
    for lhs in &newer.children[i..] {
        if lhs.size > 0 {
            changes.push(ChangeRecord::new(&lhs.path, ChangeKind::Added, lhs.size));
            change_count += 1;
            candidate = lhs.size;
        }
    }

    if change_count == 1 && candidate == total {
        return;
    }
    changes.push(ChangeRecord::new(&newer.path, ChangeKind::Grown, total));
}
