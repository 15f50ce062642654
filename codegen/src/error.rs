//! Code generation errors.

use std::io;

use cos_table::TableError;
use thiserror::Error;

/// Failure while generating or writing a table.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The table could not be built.
    #[error(transparent)]
    Table(#[from] TableError),

    /// The destination could not be created, written, or flushed.
    #[error("cannot write {destination}")]
    Io {
        /// Display form of the destination.
        destination: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
