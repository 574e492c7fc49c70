//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::convert_merge_mode;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override range
    if let Some(start) = cli.start {
        config.range.start = start;
    }
    if let Some(end) = cli.end {
        config.range.end = end;
    }

    // Override worker settings
    if let Some(threads) = cli.threads {
        config.workers.threads = threads;
    }

    // Override output settings
    if let Some(ref path) = cli.output {
        config.output.results_path = path.clone();
    }
    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    if cli.quiet {
        config.output.quiet = true;
    }

    // Override runtime settings
    if let Some(mode) = cli.merge {
        config.runtime.merge = convert_merge_mode(mode);
    }
    if cli.dry_run {
        config.runtime.dry_run = true;
    }
    if cli.debug {
        config.runtime.debug = true;
    }

    Ok(config)
}
