//! Error definitions for the harness.
//!
//! This module defines the failure modes of the chain model and protocol. It provides:
//! 1. **Description errors:** Why a mapping description was rejected, and on which line.
//! 2. **Lookup and encode errors:** Unknown field names and values that do not fit a field.
//! 3. **Contract violations:** The one guarded protocol edge (shifting out past the chain end).
//! 4. **Ambient errors:** File access and configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Reason a mapping description line (or the description as a whole) was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Fewer than the three `<position> <field> <bit>` tokens.
    #[error("expected `<position> <field> <bit>`, found fewer fields")]
    MissingField,

    /// More than three tokens on a line.
    #[error("unexpected trailing field `{0}`")]
    UnexpectedField(String),

    /// A position or bit significance that is not a non-negative integer.
    #[error("`{0}` is not a non-negative integer")]
    InvalidInteger(String),

    /// The same bit significance listed twice for one field.
    #[error("field `{field}` lists bit {bit} more than once")]
    DuplicateBit {
        /// Field name.
        field: String,
        /// Repeated bit significance.
        bit: usize,
    },

    /// The same chain position claimed by two records.
    #[error("position {position} is mapped more than once")]
    DuplicatePosition {
        /// Repeated position.
        position: usize,
    },

    /// Positions do not cover `0..total_length` densely.
    #[error("position {missing} is never mapped")]
    PositionGap {
        /// Smallest position absent from the description.
        missing: usize,
    },
}

/// Errors returned by the chain model, the protocol, and the configuration loader.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The mapping description is malformed. `line` is 1-based; 0 marks a whole-chain check.
    #[error("malformed description (line {line}): {reason}")]
    MalformedDescription {
        /// Offending line, or 0 for checks across the whole description.
        line: usize,
        /// What was wrong.
        reason: MalformedReason,
    },

    /// A mapping or configuration file could not be read.
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// No field with this name exists in the chain.
    #[error("no field named `{0}` in the chain")]
    UnknownField(String),

    /// A value does not fit in the field it is written to.
    #[error("value {value} does not fit in {width}-bit field `{field}`")]
    ValueOverflow {
        /// Field name.
        field: String,
        /// Value that was rejected.
        value: u64,
        /// Field width in bits.
        width: usize,
    },

    /// A field is too wide to be represented as a `u64`.
    #[error("field `{field}` is {width} bits wide; at most 64 bits can be decoded")]
    FieldTooWide {
        /// Field name.
        field: String,
        /// Field width in bits.
        width: usize,
    },

    /// The caller asked for a shift the chain cannot perform.
    #[error("scan contract violation: {0}")]
    ContractViolation(String),
}

impl ChainError {
    /// Shorthand for a `MalformedDescription` on `line`.
    pub(crate) const fn malformed(line: usize, reason: MalformedReason) -> Self {
        Self::MalformedDescription { line, reason }
    }
}
