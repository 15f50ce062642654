//! Cosine table conformance suite.
//!
//! Reads an emitted if/return chain back and checks it against a fresh
//! recomputation of the table:
//!
//! | Check | Requirement |
//! |-------|-------------|
//! | `chain/parse` | Every line fits the two-line block grammar |
//! | `chain/count` | Exactly `n` blocks |
//! | `chain/ordering` | Indices `0, 1, …, n-1`, no gaps or duplicates |
//! | `chain/values` | Each value within `1e-15` of `cos(i·π/n)` |
//! | `chain/values-text` | Each value in shortest round-trip form (warning only) |
//! | `chain/boundaries` | First value exactly `1.0`, last value just above `-1.0` |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = cos_table_conformance::run(Path::new("cos_table.txt"), 1024)
//!     .expect("Failed to read table");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod parse;
pub mod report;
pub mod validators;

use std::path::Path;

use anyhow::{Context, Result};

pub use parse::{parse_chain, ParseError, ParsedBlock};
pub use report::{CheckResult, ConformanceReport, Severity};

/// Runs every check over already-parsed blocks for a table of `count` samples.
///
/// Checks run in this order:
/// 1. Block count
/// 2. Index ordering
/// 3. Values against recomputation
/// 4. Boundary samples
pub fn validate(blocks: &[ParsedBlock], count: usize) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    validators::count::validate(blocks, count, &mut report);
    validators::ordering::validate(blocks, &mut report);
    validators::values::validate(blocks, count, &mut report);
    validators::boundaries::validate(blocks, count, &mut report);
    log::debug!(
        "validated {} blocks: {} failures",
        blocks.len(),
        report.failure_count()
    );
    report
}

/// Parses `text` and validates it. A parse failure becomes a failed
/// `chain/parse` result rather than an error.
pub fn validate_text(text: &str, count: usize) -> ConformanceReport {
    match parse_chain(text) {
        Ok(blocks) => {
            let mut report = ConformanceReport::new();
            report.push(CheckResult::pass(
                "chain/parse",
                format!("{} blocks parsed", blocks.len()),
            ));
            report.results.extend(validate(&blocks, count).results);
            report
        }
        Err(err) => {
            let mut report = ConformanceReport::new();
            report.push(CheckResult::fail("chain/parse", err.to_string()));
            report
        }
    }
}

/// Reads the chain at `input` and validates it.
///
/// # Errors
///
/// Returns an error only if the file cannot be read.
pub fn run(input: &Path, count: usize) -> Result<ConformanceReport> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    Ok(validate_text(&text, count))
}
