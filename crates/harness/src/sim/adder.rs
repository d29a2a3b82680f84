//! Adder design and its scan test flow.
//!
//! The reference design has two 4-bit operand registers and a 5-bit result register on a
//! 13-position chain. In functional mode one clock edge captures `x_out <= a_reg + b_reg`.

use tracing::info;

use crate::chain::{Chain, Field};
use crate::common::ChainError;
use crate::port::ScanPort;
use crate::protocol::ScanDriver;
use crate::sim::dut::CaptureLogic;

/// Mapping description of the adder's chain.
///
/// `x_out` occupies positions 0..=4, `a_reg` 5..=8, `b_reg` 9..=12; in each field the most
/// significant bit sits nearest scan-in.
pub const ADDER_MAPPING: &str = "\
0 x_out 4
1 x_out 3
2 x_out 2
3 x_out 1
4 x_out 0
5 a_reg 3
6 a_reg 2
7 a_reg 1
8 a_reg 0
9 b_reg 3
10 b_reg 2
11 b_reg 1
12 b_reg 0
";

/// First operand field name.
pub const OPERAND_A: &str = "a_reg";
/// Second operand field name.
pub const OPERAND_B: &str = "b_reg";
/// Result field name.
pub const RESULT: &str = "x_out";

/// Functional logic computing `sum <= a + b`, truncated to the width of `sum`.
///
/// Holds each field's chain positions, least significant bit first; every field is at most
/// 64 bits wide.
#[derive(Clone, Debug)]
pub struct AdderLogic {
    a: Vec<usize>,
    b: Vec<usize>,
    sum: Vec<usize>,
}

impl AdderLogic {
    /// Builds the logic over three fields of at most 64 bits each.
    pub fn new(a: &Field, b: &Field, sum: &Field) -> Result<Self, ChainError> {
        for field in [a, b, sum] {
            if field.size() > 64 {
                return Err(ChainError::FieldTooWide {
                    field: field.name().to_string(),
                    width: field.size(),
                });
            }
        }
        Ok(Self {
            a: a.positions().to_vec(),
            b: b.positions().to_vec(),
            sum: sum.positions().to_vec(),
        })
    }

    /// Resolves `a_reg`, `b_reg` and `x_out` in `chain`.
    pub fn from_chain(chain: &Chain) -> Result<Self, ChainError> {
        Self::new(
            chain.require(OPERAND_A)?,
            chain.require(OPERAND_B)?,
            chain.require(RESULT)?,
        )
    }
}

fn decode(cells: &[bool], positions: &[usize]) -> u64 {
    positions
        .iter()
        .enumerate()
        .filter(|&(_, &pos)| cells.get(pos).copied().unwrap_or(false))
        .fold(0, |acc, (bit, _)| acc | (1 << bit))
}

impl CaptureLogic for AdderLogic {
    fn capture(&mut self, cells: &mut [bool]) {
        let sum = decode(cells, &self.a).wrapping_add(decode(cells, &self.b));
        for (bit, &pos) in self.sum.iter().enumerate() {
            if let Some(cell) = cells.get_mut(pos) {
                *cell = (sum >> bit) & 1 == 1;
            }
        }
    }
}

/// Outcome of one scan-driven addition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Addition {
    /// Result positions as sampled, lowest chain position first.
    pub bits: Vec<bool>,
    /// `x_out` decoded from `bits`.
    pub sum: u64,
}

/// Drives one addition through the scan port.
///
/// Clears the result register, loads both operands in one block, lets the design run one
/// functional cycle, and shifts the result out.
pub fn run_addition<P: ScanPort>(
    driver: &mut ScanDriver<P>,
    chain: &Chain,
    a: u64,
    b: u64,
) -> Result<Addition, ChainError> {
    let a_field = chain.require(OPERAND_A)?;
    let b_field = chain.require(OPERAND_B)?;
    let result = chain.require(RESULT)?;

    let result_start = result.first().unwrap_or_default();
    driver.shift_in(&vec![false; result.span()], result_start);
    driver.release_scan();

    let mut image = chain.image();
    image.set_field(a_field, a)?;
    image.set_field(b_field, b)?;
    let start = a_field.first().min(b_field.first()).unwrap_or_default();
    let end = a_field.last().max(b_field.last()).map_or(start, |last| last + 1);
    let operands = image.slice(start, end - start).to_vec();
    driver.shift_in(&operands, start);
    driver.release_scan();

    let bits = driver.shift_out(result_start, result.span())?;
    let mut sampled = chain.image();
    sampled.load(result_start, &bits);
    let sum = sampled.field_value(result)?;
    info!(a, b, sum, "scan addition complete");
    Ok(Addition { bits, sum })
}
