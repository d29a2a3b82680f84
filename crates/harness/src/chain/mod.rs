//! Scan chain model.
//!
//! This module maps named registers onto positions of the single serial shift register. It provides:
//! 1. **Parsing:** `<position> <field> <bit>` mapping descriptions into records.
//! 2. **Building:** Grouping records into fields and validating the chain (dense, no duplicates).
//! 3. **Lookup:** Read-only access to fields by name and the total chain length.
//! 4. **Images:** `ChainImage`, a full-chain bit vector for composing stimulus and decoding responses.
//!
//! A `Chain` is built once per run and never mutated; live register contents exist only in the
//! hardware being driven.

/// Mapping description records and line parser.
pub mod description;
/// Bit-field descriptor.
pub mod field;
/// Full-chain bit vectors.
pub mod image;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::common::{ChainError, MalformedReason};

pub use description::Record;
pub use field::Field;
pub use image::ChainImage;

/// Registry of fields and the length of the physical shift register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain {
    /// Fields in description order.
    fields: Vec<Field>,
    /// Field name to index into `fields`.
    index: HashMap<String, usize>,
    /// Number of flip-flops in the chain.
    total_length: usize,
}

impl Chain {
    /// Builds a chain from description records.
    ///
    /// Records are grouped by field name in order of first appearance; each group is
    /// sorted by bit significance. Fails if a field repeats a bit significance, a position
    /// is mapped twice, or the positions do not cover `0..records.len()` without gaps.
    pub fn build(records: &[Record]) -> Result<Self, ChainError> {
        let mut groups: Vec<(String, Vec<(usize, usize)>)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut seen_bits: HashSet<(usize, usize)> = HashSet::new();
        let mut seen_positions: HashSet<usize> = HashSet::with_capacity(records.len());

        for rec in records {
            if !seen_positions.insert(rec.position) {
                return Err(ChainError::malformed(
                    rec.line,
                    MalformedReason::DuplicatePosition {
                        position: rec.position,
                    },
                ));
            }
            let slot = *index.entry(rec.field.clone()).or_insert_with(|| {
                groups.push((rec.field.clone(), Vec::new()));
                groups.len() - 1
            });
            if !seen_bits.insert((slot, rec.bit)) {
                return Err(ChainError::malformed(
                    rec.line,
                    MalformedReason::DuplicateBit {
                        field: rec.field.clone(),
                        bit: rec.bit,
                    },
                ));
            }
            groups[slot].1.push((rec.bit, rec.position));
        }

        let total_length = records.len();
        if let Some(missing) = (0..total_length).find(|p| !seen_positions.contains(p)) {
            return Err(ChainError::malformed(
                0,
                MalformedReason::PositionGap { missing },
            ));
        }

        let fields = groups
            .into_iter()
            .map(|(name, mut bits)| {
                bits.sort_unstable();
                Field::new(name, bits.into_iter().map(|(_, pos)| pos).collect())
            })
            .collect::<Vec<_>>();

        info!(
            fields = fields.len(),
            total_length, "scan chain built from mapping description"
        );
        Ok(Self {
            fields,
            index,
            total_length,
        })
    }

    /// Parses and builds a chain from mapping description text.
    pub fn parse(text: &str) -> Result<Self, ChainError> {
        Self::build(&description::parse_records(text)?)
    }

    /// Reads a mapping description file and builds the chain.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChainError> {
        crate::sim::loader::load_chain(path)
    }

    /// Number of flip-flops in the chain.
    pub const fn total_length(&self) -> usize {
        self.total_length
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Looks up a field by name, failing with `UnknownField`.
    pub fn require(&self, name: &str) -> Result<&Field, ChainError> {
        self.field(name)
            .ok_or_else(|| ChainError::UnknownField(name.to_string()))
    }

    /// Fields in description order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// An all-zero image of this chain.
    pub fn image(&self) -> ChainImage {
        ChainImage::zeroed(self.total_length)
    }

    /// Human-readable report of the chain and every field.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---CHAIN DISPLAY---\n")?;
        writeln!(f, "CHAIN SIZE: {}\n", self.total_length)?;
        writeln!(f, "REGISTERS: \n")?;
        self.fields.iter().try_for_each(|field| write!(f, "{field}"))
    }
}

impl FromStr for Chain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
