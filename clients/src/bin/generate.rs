//! `cos-table` — Generates the cosine lookup table as a chain of C-style
//! `if (i == N) return V;` fragments.
//!
//! Sample `i` holds `cos(i * pi / n)` for `i` in `0..n`.
//!
//! **Usage:**
//! ```
//! cos-table [--count <n>] [--out <path> | --stdout] [--json]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cos_table::{CosTable, DEFAULT_SAMPLE_COUNT};
use cos_table_codegen::Destination;

/// Generate a cosine lookup table as an if/return chain.
#[derive(Parser)]
#[command(
    name = "cos-table",
    about = "Generate a cosine lookup table as C-style if/return fragments"
)]
struct Args {
    /// Number of samples over [0, pi).
    #[arg(
        long,
        default_value_t = DEFAULT_SAMPLE_COUNT as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,

    /// Output file for the generated fragments.
    #[arg(long, default_value = "cos_table.txt")]
    out: PathBuf,

    /// Write the fragments to standard output instead of a file.
    #[arg(long, conflicts_with = "out")]
    stdout: bool,

    /// Print the generation report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let count = usize::try_from(args.count)
        .with_context(|| format!("Sample count {} does not fit in memory", args.count))?;
    let destination = if args.stdout {
        Destination::Stdout
    } else {
        Destination::File(args.out)
    };

    log::info!("Generating {count}-entry cosine table");
    let table = CosTable::generate(count).context("Failed to build cosine table")?;

    let report = cos_table_codegen::generate(&table, &destination)
        .with_context(|| format!("Failed to write table to {destination}"))?;

    // Keep stdout clean when it carries the table itself.
    let summary = if args.json {
        serde_json::to_string_pretty(&report).context("Failed to serialize report")?
    } else {
        format!(
            "Generated {} blocks ({} bytes) to {}",
            report.block_count, report.bytes_written, report.destination
        )
    };
    if args.stdout {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }

    Ok(())
}
