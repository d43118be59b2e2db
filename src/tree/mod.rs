//! Snapshot tree
//!
//! Represents a scanned directory subtree, where each node records the
//! allocated on-disk size aggregated over everything below it.

pub mod node;
pub mod path;
pub mod walker;
