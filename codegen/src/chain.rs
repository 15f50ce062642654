//! If/return chain rendering.
//!
//! Each sample becomes a two-line block:
//!
//! ```text
//!     if (i == 3)
//!         return 0.9999576331629252;
//! ```
//!
//! Blocks are concatenated in index order with no separator beyond their own
//! trailing newlines.

use std::io::{self, Write};

use cos_table::{CosTable, Sample};

use crate::emit::SourceBuffer;
use crate::number::render_value;

/// Rough upper bound on the size of one block, used to presize buffers.
const BLOCK_CAPACITY: usize = 64;

/// Appends the block for `sample` to `out`.
pub fn push_block(out: &mut SourceBuffer, sample: &Sample) {
    out.line(1, &format!("if (i == {})", sample.index));
    out.line(2, &format!("return {};", render_value(sample.value)));
}

/// Renders the block for a single sample.
#[must_use]
pub fn render_block(sample: &Sample) -> String {
    let mut out = SourceBuffer::with_capacity(BLOCK_CAPACITY);
    push_block(&mut out, sample);
    out.finish()
}

/// Renders the whole table as one string.
#[must_use]
pub fn render_chain(table: &CosTable) -> String {
    let mut out = SourceBuffer::with_capacity(table.len() * BLOCK_CAPACITY);
    for sample in table {
        push_block(&mut out, sample);
    }
    out.finish()
}

/// What [`emit_chain`] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStats {
    /// Blocks written.
    pub blocks: usize,
    /// Bytes written.
    pub bytes: usize,
}

/// Streams every block of `table` into `sink` and flushes it.
///
/// # Errors
///
/// Returns any error raised by `sink`.
pub fn emit_chain<W: Write>(table: &CosTable, mut sink: W) -> io::Result<ChainStats> {
    let mut stats = ChainStats { blocks: 0, bytes: 0 };
    for sample in table {
        let block = render_block(sample);
        sink.write_all(block.as_bytes())?;
        stats.blocks += 1;
        stats.bytes += block.len();
    }
    sink.flush()?;
    Ok(stats)
}
