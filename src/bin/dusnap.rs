//! Dusnap CLI Binary
//!
//! Command-line interface for the dusnap disk usage snapshot tool.

use clap::Parser;
use dusnap::cli::{Cli, RunContext};
use dusnap::config::ConfigLoader;
use dusnap::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    // Logging must be up before config loading so its warnings are visible
    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Logging setup failed: {}", e);
        process::exit(1);
    }

    info!("Dusnap CLI starting");

    let context = match RunContext::new(cli.config.as_deref()) {
        Ok(ctx) => {
            info!("Run context ready");
            ctx
        }
        Err(e) => {
            error!(error = %e, "Configuration could not be loaded");
            eprintln!("{}", dusnap::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command finished");
            println!("{}", output);
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("{}", dusnap::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Assemble the logging settings the subscriber is built from.
/// CLI flags beat config file values, which beat defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load()
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if cli.quiet {
        config.level = "off".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    config
}
