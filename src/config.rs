//! Configuration loading
//!
//! Hierarchical configuration merged from defaults and an optional
//! global config file, with CLI overrides applied by the binary.

use crate::error::SnapshotError;
use crate::logging::LoggingConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Top-level configuration for the whole tool
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DusnapConfig {
    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Snapshot output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Levels of structure retained below the scan root; entries
    /// deeper than this still contribute to aggregated sizes
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

fn default_max_depth() -> u32 {
    5
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Snapshot output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory snapshot files are written into
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

/// Configuration loader: defaults first, then the global config file.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from defaults and the global config file.
    pub fn load() -> Result<DusnapConfig, SnapshotError> {
        let mut builder = builder_with_defaults()?;
        builder = add_global_source(builder);
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from an explicit file over the defaults.
    pub fn load_from_file(path: &Path) -> Result<DusnapConfig, SnapshotError> {
        let builder = builder_with_defaults()?.add_source(
            File::from(path.to_path_buf())
                .format(FileFormat::Toml)
                .required(true),
        );
        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Path to the global config file, e.g. ~/.config/dusnap/config.toml on Linux.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dusnap").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Create a Config builder with defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    Config::builder()
        .set_default("scan.max_depth", 5_i64)?
        .set_default("output.directory", ".")
}

/// Add the global config file source to the builder when present.
fn add_global_source(mut builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            builder = builder.add_source(
                File::from(global_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        } else {
            warn!(
                config_path = %global_path.display(),
                "Global configuration file not found; using defaults"
            );
        }
    }
    builder
}
