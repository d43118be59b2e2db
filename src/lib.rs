//! Dusnap: Disk Usage Snapshots
//!
//! Scans a directory subtree into a tree of allocated disk usage and
//! persists it as a JSON document. Two persisted snapshots can then be
//! compared to report which paths grew.

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod store;
pub mod tree;
