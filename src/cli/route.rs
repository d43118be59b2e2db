//! CLI route: single route table and run context. Dispatches to the
//! walker, store, and diff services and prints the growth report.

use crate::cli::parse::Commands;
use crate::cli::presentation::format_change_line;
use crate::config::{ConfigLoader, DusnapConfig};
use crate::diff::diff;
use crate::error::SnapshotError;
use crate::store;
use crate::tree::walker::Walker;
use std::path::Path;
use tracing::info;

/// Runtime context for CLI execution, built from the merged
/// configuration with ConfigLoader only.
pub struct RunContext {
    config: DusnapConfig,
}

impl RunContext {
    /// Create a run context from an optional explicit config path.
    pub fn new(config_path: Option<&Path>) -> Result<Self, SnapshotError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        Ok(Self { config })
    }

    /// Execute a CLI command via the route table.
    pub fn execute(&self, command: &Commands) -> Result<String, SnapshotError> {
        match command {
            Commands::Stat { dir, depth } => self.run_stat(dir, *depth),
            Commands::Diff { older, newer } => self.run_diff(older, newer),
        }
    }

    fn run_stat(&self, dir: &str, depth: Option<u32>) -> Result<String, SnapshotError> {
        let max_depth = depth.unwrap_or(self.config.scan.max_depth);
        info!(root = dir, max_depth, "scanning directory");

        let root = Walker::new(dir, max_depth).scan()?;

        let file_name = store::snapshot_file_name(dir);
        let output_path = self.config.output.directory.join(file_name);
        store::write_snapshot(&output_path, &root)?;
        info!(
            snapshot = %output_path.display(),
            total_size = root.size,
            "snapshot written"
        );
        Ok(output_path.display().to_string())
    }

    fn run_diff(&self, older_path: &Path, newer_path: &Path) -> Result<String, SnapshotError> {
        info!(snapshot = %older_path.display(), "loading older snapshot");
        let older = store::read_snapshot(older_path)?;
        info!(snapshot = %newer_path.display(), "loading newer snapshot");
        let newer = store::read_snapshot(newer_path)?;

        info!(
            older = %older_path.display(),
            newer = %newer_path.display(),
            "comparing snapshots"
        );
        let changes = diff(&newer, &older);
        // Report lines go to the diagnostic stream, one per change,
        // separate from the stdout summary the binary prints.
        for record in &changes {
            eprintln!("{}", format_change_line(record));
        }

        match changes.len() {
            0 => Ok("no growth detected".to_string()),
            1 => Ok("1 path reported".to_string()),
            n => Ok(format!("{} paths reported", n)),
        }
    }
}
