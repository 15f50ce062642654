//! Errors raised while building a table.

use thiserror::Error;

/// Failure to construct a [`CosTable`](crate::CosTable).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A table needs at least one sample.
    #[error("sample count must be positive, got 0")]
    EmptyTable,
}
