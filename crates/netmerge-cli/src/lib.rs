//! # netmerge-cli
//!
//! Command-line front end for FPGA net group consolidation.
//!
//! ```text
//! netmerge <input_file> [output_file] [--config <path>] [--verbose]
//! ```
//!
//! Progress lines and, without an output file, the report itself are written
//! to standard output. Logging goes to standard error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use netmerge_core::{consolidate, parser, Report};

pub use config::NetmergeConfig;
pub use error::{Error, Result};

/// Consolidate FPGA net groups that share a connection pattern
#[derive(Parser, Debug)]
#[command(name = "netmerge", version, about, long_about = None)]
pub struct Args {
    /// Net group report to read
    pub input_file: PathBuf,

    /// Where to write the consolidated report (printed if omitted)
    pub output_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the stderr log subscriber.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs one consolidation, writing progress and console output to `out`.
///
/// # Errors
///
/// Fails if the configuration or input cannot be read, or if the report
/// cannot be written.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    let config = NetmergeConfig::load(args.config.as_deref())?;

    writeln!(out, "Reading and parsing net groups...")?;
    let records = parser::parse_file(&args.input_file)?;
    writeln!(out, "Parsed {} net groups", records.len())?;

    writeln!(out, "Consolidating groups with identical connection patterns...")?;
    let consolidation = consolidate(records);

    writeln!(out, "Generating output...")?;
    let report = Report::from_consolidation(&consolidation, &config.report);

    match &args.output_file {
        Some(path) => {
            report.write_to(path)?;
            writeln!(out, "Output written to {}", path.display())?;
        }
        None => {
            writeln!(out)?;
            writeln!(out, "{}", report.text())?;
        }
    }

    tracing::info!(
        original = report.statistics().original_groups,
        consolidated = report.statistics().consolidated_groups,
        "Consolidation finished"
    );
    Ok(())
}
