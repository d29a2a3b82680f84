//! Full-chain bit vectors.
//!
//! A `ChainImage` holds one bit per chain position. Test flows compose stimulus by
//! writing field values into an image and slicing out the block to shift in, and decode
//! responses by loading sampled bits back and reading field values.

use tracing::warn;

use crate::chain::Field;
use crate::common::ChainError;

/// One bit per chain position, position 0 first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainImage {
    cells: Vec<bool>,
}

impl ChainImage {
    /// All-zero image of `len` positions.
    pub fn zeroed(len: usize) -> Self {
        Self {
            cells: vec![false; len],
        }
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the image has no positions.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All bits, position 0 first.
    pub fn bits(&self) -> &[bool] {
        &self.cells
    }

    /// Writes `value` into `field`'s positions.
    pub fn set_field(&mut self, field: &Field, value: u64) -> Result<(), ChainError> {
        field.write_value(&mut self.cells, 0, value)
    }

    /// Reads `field`'s value from the image.
    pub fn field_value(&self, field: &Field) -> Result<u64, ChainError> {
        field.read_value(&self.cells, 0)
    }

    /// `len` bits starting at `start`, clamped to the image.
    pub fn slice(&self, start: usize, len: usize) -> &[bool] {
        if start.saturating_add(len) > self.cells.len() {
            warn!(
                start,
                len,
                image_len = self.cells.len(),
                "slice clamped to the chain image"
            );
        }
        let start = start.min(self.cells.len());
        let end = start.saturating_add(len).min(self.cells.len());
        &self.cells[start..end]
    }

    /// Copies `bits` into the image starting at `start`; bits past the end are dropped.
    pub fn load(&mut self, start: usize, bits: &[bool]) {
        if start.saturating_add(bits.len()) > self.cells.len() {
            warn!(
                start,
                len = bits.len(),
                image_len = self.cells.len(),
                "bits past the chain image dropped"
            );
        }
        for (cell, &bit) in self.cells.iter_mut().skip(start).zip(bits) {
            *cell = bit;
        }
    }
}
