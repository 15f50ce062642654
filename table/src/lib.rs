//! Cosine lookup table encoded as typed Rust data.
//!
//! The `cos-table` crate computes `n` evenly spaced samples of `cos` over the
//! half-open interval `[0, π)`: sample `i` holds `cos(i · π / n)`. The table is
//! built once and never mutated; code generators and validators borrow it.
//!
//! # Entry Point
//!
//! ```
//! let table = cos_table::CosTable::default_table();
//! assert_eq!(table.len(), cos_table::DEFAULT_SAMPLE_COUNT);
//! assert_eq!(table.samples()[0].value, 1.0);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;

pub use error::TableError;
pub use model::{cos_sample, CosTable, Sample, DEFAULT_SAMPLE_COUNT};
