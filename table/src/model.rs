//! Core table model types.
//!
//! A [`CosTable`] is an ordered, immutable list of [`Sample`]s. Index `i`
//! always sits at position `i`, so lookups are a single slice access.

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::TableError;

/// Sample count used when none is given.
pub const DEFAULT_SAMPLE_COUNT: usize = 1024;

/// Computes the cosine sample for `index` in a table of `count` entries.
///
/// The argument is `(index · π) / count`, multiplied before dividing. Any
/// change to that order shifts the last bit of some samples.
#[must_use]
pub fn cos_sample(index: usize, count: usize) -> f64 {
    ((index as f64 * PI) / count as f64).cos()
}

/// One table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Position in the table, `0 <= index < count`.
    pub index: usize,
    /// `cos(index · π / count)`.
    pub value: f64,
}

/// A precomputed cosine lookup table over `[0, π)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CosTable {
    samples: Vec<Sample>,
}

impl CosTable {
    /// Computes all `count` samples in ascending index order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::EmptyTable`] when `count` is zero.
    pub fn generate(count: usize) -> Result<Self, TableError> {
        if count == 0 {
            return Err(TableError::EmptyTable);
        }
        let table = Self::compute(count);
        log::debug!("computed {} cosine samples", table.len());
        Ok(table)
    }

    /// Returns the table with [`DEFAULT_SAMPLE_COUNT`] samples.
    #[must_use]
    pub fn default_table() -> Self {
        Self::compute(DEFAULT_SAMPLE_COUNT)
    }

    fn compute(count: usize) -> Self {
        let samples = (0..count)
            .map(|index| Sample {
                index,
                value: cos_sample(index, count),
            })
            .collect();
        Self { samples }
    }

    /// All samples, ordered by index.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples (`n`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; a table holds at least one sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the sample at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// The `i = 0` sample, always `1.0`.
    #[must_use]
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// The `i = n - 1` sample, just above `-1.0`.
    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Iterates the samples in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a CosTable {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
