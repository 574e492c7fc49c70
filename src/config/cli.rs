//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// primesweep - Parallel prime counting over an integer range
#[derive(Parser, Debug)]
#[command(name = "primesweep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Range Options ===
    /// First integer of the range (inclusive)
    #[arg(long, env = "PRIMESWEEP_START", allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Last integer of the range (inclusive)
    #[arg(long, env = "PRIMESWEEP_END", allow_negative_numbers = true)]
    pub end: Option<i64>,

    // === Worker Options ===
    /// Number of worker threads (one range per worker)
    #[arg(short = 't', long, env = "PRIMESWEEP_THREADS")]
    pub threads: Option<usize>,

    /// How per-worker top-10 lists are merged
    #[arg(long, value_enum)]
    pub merge: Option<MergeMode>,

    // === Output Options ===
    /// Results file path (default: results.txt)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// JSON summary output file path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Do not print the summary to the console
    #[arg(short = 'q', long)]
    pub quiet: bool,

    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without executing
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output (timing, per-worker results)
    #[arg(long)]
    pub debug: bool,
}

/// Top-10 merge mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MergeMode {
    /// Slot-by-slot maximum (approximate beyond the largest prime)
    Slotwise,
    /// True ten largest primes across all workers
    Exact,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.threads == Some(0) {
            anyhow::bail!("threads must be at least 1");
        }

        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                anyhow::bail!("start ({}) must not be greater than end ({})", start, end);
            }
        }

        Ok(())
    }
}
