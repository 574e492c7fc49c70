//! CLI to Config conversion utilities

use crate::config::{cli, toml, Config};
use crate::stats::aggregator::MergeStrategy;
use anyhow::{Context, Result};

/// Convert CLI MergeMode to aggregator MergeStrategy
pub fn convert_merge_mode(mode: cli::MergeMode) -> MergeStrategy {
    match mode {
        cli::MergeMode::Slotwise => MergeStrategy::Slotwise,
        cli::MergeMode::Exact => MergeStrategy::Exact,
    }
}

/// Build the run configuration from CLI arguments
///
/// Starts from the TOML file given with `--config` (or the defaults) and
/// applies every flag that was set explicitly on top.
pub fn build_config_from_cli(cli: &cli::Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => toml::parse_toml_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };

    toml::merge_cli_with_config(cli, base)
}
