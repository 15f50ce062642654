//! Cosine table code generator.
//!
//! Renders a [`CosTable`] as a chain of C-style conditional returns, one
//! two-line block per sample, ready to paste into the body of a lookup
//! function in a host program:
//!
//! ```text
//!     if (i == 0)
//!         return 1.0;
//!     if (i == 1)
//!         return 0.9999952938095762;
//! ```
//!
//! # Entry Point
//!
//! ```no_run
//! use cos_table_codegen::{generate_for_count, Destination};
//!
//! let report = generate_for_count(1024, &Destination::File("cos_table.txt".into()))
//!     .expect("Failed to write table");
//! assert_eq!(report.block_count, 1024);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod chain;
pub mod emit;
pub mod error;
pub mod number;

use cos_table::CosTable;
use serde::Serialize;

pub use chain::{emit_chain, render_block, render_chain, ChainStats};
pub use emit::Destination;
pub use error::EmitError;
pub use number::render_value;

/// Report of what was generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    /// Number of samples in the table (`n`).
    pub sample_count: usize,
    /// Number of if/return blocks actually written to the destination.
    pub block_count: usize,
    /// Bytes written to the destination.
    pub bytes_written: usize,
    /// Where the table went.
    pub destination: String,
    /// Rendered value of the `i = 0` block.
    pub first_value: Option<String>,
    /// Rendered value of the `i = n - 1` block.
    pub last_value: Option<String>,
}

/// Writes the complete chain for `table` to `destination`.
///
/// The destination is released when this returns, on success or failure.
///
/// # Errors
///
/// Returns [`EmitError::Io`] if the destination cannot be opened, written, or
/// flushed.
pub fn generate(
    table: &CosTable,
    destination: &Destination,
) -> Result<GenerationReport, EmitError> {
    let sink = destination.open()?;
    let stats = emit_chain(table, sink).map_err(|source| EmitError::Io {
        destination: destination.to_string(),
        source,
    })?;
    log::info!(
        "wrote {} blocks ({} bytes) to {}",
        stats.blocks,
        stats.bytes,
        destination
    );

    Ok(GenerationReport {
        sample_count: table.len(),
        block_count: stats.blocks,
        bytes_written: stats.bytes,
        destination: destination.to_string(),
        first_value: table.first().map(|s| render_value(s.value)),
        last_value: table.last().map(|s| render_value(s.value)),
    })
}

/// Builds a table of `count` samples and writes it to `destination`.
///
/// # Errors
///
/// Returns [`EmitError::Table`] for a zero count, or [`EmitError::Io`] if the
/// destination fails.
pub fn generate_for_count(
    count: usize,
    destination: &Destination,
) -> Result<GenerationReport, EmitError> {
    let table = CosTable::generate(count)?;
    log::debug!("generating {count}-entry table for {destination}");
    generate(&table, destination)
}
