//! CLI parse: clap types for dusnap. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Dusnap CLI - disk usage snapshots with growth attribution
#[derive(Parser)]
#[command(name = "dusnap")]
#[command(about = "Disk usage snapshots with growth attribution")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (bypasses the global config lookup)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Turn on debug-level logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Silence logging entirely; report lines are still printed
    #[arg(long)]
    pub quiet: bool,

    /// Log level override (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format override (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and write a timestamped snapshot file
    #[command(alias = "s")]
    Stat {
        /// Directory to scan
        dir: String,

        /// Levels of structure to keep below the root; sizes always
        /// cover the full subtree regardless of this bound
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Report which paths grew between two snapshots
    #[command(alias = "d")]
    Diff {
        /// Older snapshot file
        older: PathBuf,

        /// Newer snapshot file
        newer: PathBuf,
    },
}
