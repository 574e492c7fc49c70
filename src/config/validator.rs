//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_range(&config.range)?;
    validate_workers(&config.workers)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate range configuration
pub fn validate_range(range: &RangeConfig) -> Result<()> {
    if range.start > range.end {
        anyhow::bail!(
            "range start ({}) must not be greater than range end ({})",
            range.start,
            range.end
        );
    }

    // (end - start + 1) must fit in i64
    if range.end.checked_sub(range.start).and_then(|d| d.checked_add(1)).is_none() {
        anyhow::bail!("range [{}, {}] is too large", range.start, range.end);
    }

    if range.start < 2 {
        eprintln!(
            "Warning: range start {} is below 2; values below 2 are never prime",
            range.start
        );
    }

    Ok(())
}

/// Validate worker configuration
pub fn validate_workers(workers: &WorkerConfig) -> Result<()> {
    if workers.threads == 0 {
        anyhow::bail!("threads must be at least 1");
    }

    if workers.threads > 4096 {
        anyhow::bail!("threads must be at most 4096, got {}", workers.threads);
    }

    warn_if_oversubscribed(workers.threads);

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.results_path.as_os_str().is_empty() {
        anyhow::bail!("results path must not be empty");
    }

    if let Some(ref json) = output.json_output {
        if json == &output.results_path {
            anyhow::bail!(
                "JSON output and results file must differ: {}",
                json.display()
            );
        }
    }

    Ok(())
}

/// Warn when the pool has more threads than CPU cores
///
/// Returns true if the thread count exceeds the CPU count.
pub fn warn_if_oversubscribed(thread_count: usize) -> bool {
    let cpu_count = num_cpus::get();
    if thread_count > cpu_count {
        eprintln!(
            "Warning: Thread count ({}) exceeds CPU count ({}). \
             Workers will share cores.",
            thread_count, cpu_count
        );
        true
    } else {
        false
    }
}
