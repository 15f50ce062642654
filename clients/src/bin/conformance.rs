//! `cos-table-conformance` — Validates an emitted cosine table against a
//! fresh recomputation.
//!
//! Checks the block grammar, block count, index ordering, every value, and
//! the boundary samples.
//!
//! **Usage:**
//! ```
//! cos-table-conformance [--input <path>] [--count <n>]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use cos_table::DEFAULT_SAMPLE_COUNT;
use cos_table_conformance::Severity;

/// Validate an emitted cosine table.
#[derive(Parser)]
#[command(
    name = "cos-table-conformance",
    about = "Validate a generated cosine table against recomputation"
)]
struct Args {
    /// Emitted table to check.
    #[arg(long, default_value = "cos_table.txt")]
    input: PathBuf,

    /// Sample count the table was generated with.
    #[arg(
        long,
        default_value_t = DEFAULT_SAMPLE_COUNT as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let count = usize::try_from(args.count)
        .with_context(|| format!("Sample count {} does not fit in memory", args.count))?;
    let report = cos_table_conformance::run(&args.input, count)?;

    println!("Cosine Table Conformance Report: {}", args.input.display());
    println!("================================");
    println!();

    for result in &report.results {
        println!("[{}] {} — {}", result.severity, result.check, result.message);
        for detail in &result.details {
            println!("       {}", detail);
        }
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", failed);
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
