//! Output helpers: an indentation-aware source buffer and output destinations.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::EmitError;

/// Spaces per indentation level in generated fragments.
pub const INDENT: &str = "    ";

/// Accumulates generated source text line by line.
#[derive(Debug)]
pub struct SourceBuffer {
    buf: String,
}

impl SourceBuffer {
    /// Creates an empty buffer with room for `bytes` bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: String::with_capacity(bytes),
        }
    }

    /// Appends `text` indented by `level` steps, followed by a newline.
    pub fn line(&mut self, level: usize, text: &str) {
        for _ in 0..level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Returns the finished text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Where a generated table is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A file, created or truncated.
    File(PathBuf),
    /// The process's standard output.
    Stdout,
}

impl Destination {
    /// Opens the destination for buffered writing.
    ///
    /// Missing parent directories of a file destination are created.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Io`] if a directory or the file cannot be created.
    pub fn open(&self) -> Result<Box<dyn Write>, EmitError> {
        match self {
            Destination::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|source| EmitError::Io {
                        destination: parent.display().to_string(),
                        source,
                    })?;
                }
                let file = File::create(path).map_err(|source| EmitError::Io {
                    destination: self.to_string(),
                    source,
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
            Destination::Stdout => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::File(path) => write!(f, "{}", path.display()),
            Destination::Stdout => f.write_str("<stdout>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_indents_by_level() {
        let mut b = SourceBuffer::with_capacity(0);
        b.line(0, "a");
        b.line(1, "b");
        b.line(2, "c");
        assert_eq!(b.finish(), "a\n    b\n        c\n");
    }

    #[test]
    fn destination_display() {
        assert_eq!(Destination::Stdout.to_string(), "<stdout>");
        assert_eq!(
            Destination::File(PathBuf::from("out/cos_table.txt")).to_string(),
            "out/cos_table.txt"
        );
    }
}
