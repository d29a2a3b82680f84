//! Mapping description parsing.
//!
//! A description is one line per flip-flop, `<position> <field_name> <bit_significance>`,
//! whitespace separated, no header. Blank lines are skipped.

use crate::common::{ChainError, MalformedReason};

/// One line of a mapping description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Absolute chain position of the flip-flop.
    pub position: usize,
    /// Field the flip-flop belongs to.
    pub field: String,
    /// Bit significance of the flip-flop within its field.
    pub bit: usize,
    /// 1-based source line, used in error reports.
    pub line: usize,
}

impl Record {
    /// Creates a record not tied to a source line.
    pub fn new(position: usize, field: impl Into<String>, bit: usize) -> Self {
        Self {
            position,
            field: field.into(),
            bit,
            line: 0,
        }
    }
}

/// Splits a description into records without checking chain-wide invariants.
pub fn parse_records(text: &str) -> Result<Vec<Record>, ChainError> {
    text.lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(idx, raw)| parse_line(idx + 1, raw))
        .collect()
}

fn parse_line(line: usize, raw: &str) -> Result<Record, ChainError> {
    let mut tokens = raw.split_whitespace();
    let (Some(position), Some(field), Some(bit)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(ChainError::malformed(line, MalformedReason::MissingField));
    };
    if let Some(extra) = tokens.next() {
        return Err(ChainError::malformed(
            line,
            MalformedReason::UnexpectedField(extra.to_string()),
        ));
    }
    Ok(Record {
        position: parse_index(line, position)?,
        field: field.to_string(),
        bit: parse_index(line, bit)?,
        line,
    })
}

fn parse_index(line: usize, token: &str) -> Result<usize, ChainError> {
    token.parse().map_err(|_| {
        ChainError::malformed(line, MalformedReason::InvalidInteger(token.to_string()))
    })
}
