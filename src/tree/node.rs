//! Snapshot tree nodes
//!
//! A snapshot is a tree of `SnapshotNode` values, one per filesystem
//! entry, each carrying the allocated on-disk size aggregated over its
//! whole subtree. The node path is the single key used for ordering
//! children and for matching entries between two snapshots.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Size of one allocation block as reported by `st_blocks`.
pub const BLOCK_SIZE: u64 = 512;

/// Classification of a filesystem entry.
///
/// The numeric codes are stable and appear verbatim in persisted
/// snapshot files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileKind {
    /// Entry could not be stat'ed, or is none of the kinds below.
    #[default]
    Unknown = 0,
    Regular = 1,
    Directory = 2,
    Link = 3,
}

impl FileKind {
    /// Numeric code stored in snapshot files.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Map a stored code back to a kind. Out-of-range codes collapse
    /// to `Unknown`.
    pub fn from_code(code: u64) -> FileKind {
        match code {
            1 => FileKind::Regular,
            2 => FileKind::Directory,
            3 => FileKind::Link,
            _ => FileKind::Unknown,
        }
    }
}

impl Serialize for FileKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

/// One entry in a snapshot tree.
///
/// `size` is the allocated size in bytes of the entry plus everything
/// below it, even levels deeper than the walker was asked to retain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotNode {
    pub path: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(rename = "subs", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    /// Stat the entry at `path` without following symlinks and build a
    /// childless node for it.
    ///
    /// Entries that cannot be stat'ed come back as `Unknown` with size
    /// zero; the failure is logged, not returned.
    pub fn resolve(path: impl Into<String>) -> SnapshotNode {
        let path = path.into();
        let disk_path = PathBuf::from(&path);
        SnapshotNode::resolve_at(&disk_path, path)
    }

    /// Stat `disk_path` without following symlinks, recording `path` as
    /// the node path.
    ///
    /// The two arguments differ only when an entry name is not valid
    /// UTF-8: the stat needs the real on-disk bytes while the recorded
    /// path carries the lossy rendering.
    pub fn resolve_at(disk_path: &Path, path: String) -> SnapshotNode {
        let mut node = SnapshotNode {
            path,
            ..SnapshotNode::default()
        };
        match fs::symlink_metadata(disk_path) {
            Ok(metadata) => {
                node.size = allocated_size(&metadata);
                let file_type = metadata.file_type();
                if file_type.is_dir() {
                    node.kind = FileKind::Directory;
                } else if file_type.is_file() {
                    node.kind = FileKind::Regular;
                } else if file_type.is_symlink() {
                    node.kind = FileKind::Link;
                }
            }
            Err(error) => {
                warn!(path = %node.path, %error, "failed to stat entry");
            }
        }
        node
    }

    /// Sort direct children by path.
    pub fn sort_children(&mut self) {
        self.children.sort_by(|a, b| a.path.cmp(&b.path));
    }

    /// Sort children by path at every level of the subtree.
    pub fn sort_children_recursive(&mut self) {
        for child in &mut self.children {
            child.sort_children_recursive();
        }
        self.sort_children();
    }

    /// Rebuild a node from a parsed JSON value.
    ///
    /// Reading is deliberately lenient so a snapshot written by an
    /// older build still loads: missing or mistyped fields keep their
    /// defaults, unrecognized fields are ignored, and child records
    /// that are not objects are dropped with a warning. Children are
    /// sorted by path after loading so merges can rely on their order.
    ///
    /// Returns `None` only when `value` itself is not an object.
    pub fn from_value(value: &serde_json::Value) -> Option<SnapshotNode> {
        let record = value.as_object()?;
        let mut node = SnapshotNode::default();
        for (field, value) in record {
            match field.as_str() {
                "path" => {
                    if let Some(path) = value.as_str() {
                        node.path = path.to_string();
                    }
                }
                "size" => {
                    if let Some(size) = value.as_u64() {
                        node.size = size;
                    }
                }
                "type" => {
                    if let Some(code) = value.as_u64() {
                        node.kind = FileKind::from_code(code);
                    }
                }
                "subs" => match value.as_array() {
                    Some(records) => {
                        for record in records {
                            match SnapshotNode::from_value(record) {
                                Some(child) => node.children.push(child),
                                None => warn!(
                                    parent = %node.path,
                                    found = json_type_name(record),
                                    "dropping child record that is not an object"
                                ),
                            }
                        }
                        node.sort_children();
                    }
                    None => warn!(
                        parent = %node.path,
                        found = json_type_name(value),
                        "ignoring subs field that is not an array"
                    ),
                },
                _ => {}
            }
        }
        Some(node)
    }
}

impl<'de> Deserialize<'de> for SnapshotNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        SnapshotNode::from_value(&value)
            .ok_or_else(|| serde::de::Error::custom("snapshot record is not a JSON object"))
    }
}

#[cfg(unix)]
fn allocated_size(metadata: &fs::Metadata) -> u64 {
    use std::os::unix::fs::MetadataExt;
    metadata.blocks() * BLOCK_SIZE
}

#[cfg(not(unix))]
fn allocated_size(metadata: &fs::Metadata) -> u64 {
    metadata.len()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
