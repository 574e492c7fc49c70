//! primesweep CLI entry point

use anyhow::{Context, Result};
use primesweep::config::{cli::Cli, cli_convert, validator, Config};
use primesweep::{coordinator, output};
use std::time::Instant;

fn main() -> Result<()> {
    println!("primesweep v{}", env!("CARGO_PKG_VERSION"));
    println!("Parallel prime counting");
    println!();

    // Parse CLI arguments
    let parse_start = Instant::now();
    let cli = Cli::parse_args();
    cli.validate()?;
    let parse_elapsed = parse_start.elapsed();
    if cli.debug {
        eprintln!("DEBUG TIMING: CLI parse: {:.3}s", parse_elapsed.as_secs_f64());
    }

    // Build and validate configuration
    let config = cli_convert::build_config_from_cli(&cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;

    print_configuration(&config);

    if config.runtime.dry_run {
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    println!();
    println!("Starting scan...");
    println!();

    let report = coordinator::run(&config)?;

    let output_start = Instant::now();
    let failures = output::emit_results(&config.output, &report);
    if config.runtime.debug {
        eprintln!("DEBUG TIMING: Output: {:.3}s", output_start.elapsed().as_secs_f64());
    }
    if failures > 0 {
        eprintln!("Warning: {} output(s) could not be written", failures);
    }

    Ok(())
}

/// Display the effective configuration
fn print_configuration(config: &Config) {
    print!("{}", config);
}
