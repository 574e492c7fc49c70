//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::stats::aggregator::MergeStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete run configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub range: RangeConfig,
    #[serde(default)]
    pub workers: WorkerConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Integer range to scan (inclusive)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    #[serde(default = "default_start")]
    pub start: i64,
    #[serde(default = "default_end")]
    pub end: i64,
}

pub(crate) fn default_start() -> i64 {
    2
}

pub(crate) fn default_end() -> i64 {
    100_000_000
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Worker pool size, also the number of ranges
    #[serde(default = "default_threads")]
    pub threads: usize,
}

pub(crate) fn default_threads() -> usize {
    8
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Two-line results file
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    /// Optional JSON summary file
    pub json_output: Option<PathBuf>,
    /// Suppress the console summary
    #[serde(default)]
    pub quiet: bool,
}

pub(crate) fn default_results_path() -> PathBuf {
    PathBuf::from("results.txt")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: default_results_path(),
            json_output: None,
            quiet: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub merge: MergeStrategy,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub debug: bool,
}

// Display trait implementations

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Range: {}", self.range)?;
        writeln!(f, "  Workers: {}", self.workers)?;
        writeln!(f, "  Output: {}", self.output)?;
        writeln!(f, "  Runtime: {}", self.runtime)?;
        Ok(())
    }
}

impl fmt::Display for RangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl fmt::Display for WorkerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "threads={}", self.threads)
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "results={}", self.results_path.display())?;
        if let Some(ref path) = self.json_output {
            write!(f, ", json={}", path.display())?;
        }
        if self.quiet {
            write!(f, ", quiet")?;
        }
        Ok(())
    }
}

impl fmt::Display for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "merge={}", self.merge)?;
        if self.dry_run {
            write!(f, ", dry_run")?;
        }
        if self.debug {
            write!(f, ", debug")?;
        }
        Ok(())
    }
}
