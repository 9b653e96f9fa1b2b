//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `rdap_report` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the formatted report to stdout
//!
//! All formatting logic is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use rdap_report::initialization::init_logger_with;
use rdap_report::{format_domain, read_record, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    init_logger_with(log_level.into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("rdap_report error: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let record = read_record(&config.file)
        .with_context(|| format!("Failed to load RDAP document from {}", config.file.display()))?;

    let report = format_domain(record.as_ref());
    if report.ends_with('\n') {
        print!("{report}");
    } else {
        println!("{report}");
    }
    Ok(())
}
