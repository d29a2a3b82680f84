//! Bit-field descriptor.
//!
//! A `Field` is one named register of the design as it appears in the scan chain:
//! the ordered list of absolute chain positions its bits occupy, least significant
//! bit first.

use std::fmt;

use tracing::warn;

use crate::common::ChainError;

/// A named register mapped onto the scan chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    /// Chain position of each bit, indexed by bit significance order (bit 0 first).
    positions: Vec<usize>,
    /// Bookkeeping copy of the field's bits in `positions` order. Not authoritative.
    pub value_bits: Vec<bool>,
}

impl Field {
    /// Creates a field from positions already sorted by bit significance.
    pub(crate) fn new(name: String, positions: Vec<usize>) -> Self {
        let value_bits = vec![false; positions.len()];
        Self {
            name,
            positions,
            value_bits,
        }
    }

    /// Field name as given in the mapping description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bits in the field.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Chain positions, least significant bit first.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Lowest chain position the field occupies.
    pub fn first(&self) -> Option<usize> {
        self.positions.iter().copied().min()
    }

    /// Highest chain position the field occupies.
    pub fn last(&self) -> Option<usize> {
        self.positions.iter().copied().max()
    }

    /// Number of chain positions from `first()` to `last()` inclusive.
    ///
    /// Equal to `size()` when the field's bits are contiguous in the chain.
    pub fn span(&self) -> usize {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => last - first + 1,
            _ => 0,
        }
    }

    /// Decodes the field's value from a slice of chain cells starting at chain position `base`.
    ///
    /// Positions outside the slice read as zero.
    pub fn read_value(&self, cells: &[bool], base: usize) -> Result<u64, ChainError> {
        self.check_width()?;
        let outside = self.positions_outside(cells.len(), base);
        if outside > 0 {
            warn!(
                field = %self.name,
                outside,
                base,
                "field positions outside the cells read as zero"
            );
        }
        let value = self
            .positions
            .iter()
            .enumerate()
            .filter(|&(_, &pos)| {
                pos.checked_sub(base)
                    .and_then(|i| cells.get(i))
                    .copied()
                    .unwrap_or(false)
            })
            .fold(0u64, |acc, (bit, _)| acc | (1 << bit));
        Ok(value)
    }

    /// Encodes `value` into a slice of chain cells starting at chain position `base`.
    ///
    /// Positions outside the slice are skipped.
    pub fn write_value(&self, cells: &mut [bool], base: usize, value: u64) -> Result<(), ChainError> {
        self.check_width()?;
        if self.size() < 64 && value >> self.size() != 0 {
            return Err(ChainError::ValueOverflow {
                field: self.name.clone(),
                value,
                width: self.size(),
            });
        }
        let outside = self.positions_outside(cells.len(), base);
        if outside > 0 {
            warn!(
                field = %self.name,
                outside,
                base,
                "field positions outside the cells not written"
            );
        }
        for (bit, &pos) in self.positions.iter().enumerate() {
            if let Some(cell) = pos.checked_sub(base).and_then(|i| cells.get_mut(i)) {
                *cell = (value >> bit) & 1 == 1;
            }
        }
        Ok(())
    }

    fn positions_outside(&self, len: usize, base: usize) -> usize {
        self.positions
            .iter()
            .filter(|&&pos| pos.checked_sub(base).is_none_or(|i| i >= len))
            .count()
    }

    fn check_width(&self) -> Result<(), ChainError> {
        if self.size() > 64 {
            return Err(ChainError::FieldTooWide {
                field: self.name.clone(),
                width: self.size(),
            });
        }
        Ok(())
    }

    /// Human-readable report of the field: name, cached bits, and positions.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits: Vec<u8> = self.value_bits.iter().map(|&b| u8::from(b)).collect();
        writeln!(f, "------------------")?;
        writeln!(f, "NAME:    {}", self.name)?;
        writeln!(f, "BITS:    {bits:?}")?;
        writeln!(f, "INDICES: {:?}", self.positions)?;
        writeln!(f, "------------------")
    }
}
