//! # Adder Scan Flow Tests
//!
//! The 13-position adder chain (`x_out` 5 bits, `a_reg` and `b_reg` 4 bits):
//! operands scanned in as one block, one functional cycle, result scanned out.

use pretty_assertions::assert_eq;
use rstest::rstest;
use scanchain_core::chain::Chain;
use scanchain_core::common::{ChainError, to_bits_msb};
use scanchain_core::protocol::ScanDriver;
use scanchain_core::sim::{ADDER_MAPPING, AdderLogic, CaptureLogic, ScanDut, run_addition};

use crate::common::harness::{adder_bench, bits, ints};

/// Replays the reference flow with literal bit lists and offsets.
fn reference_flow(operands: &[u8]) -> Vec<u8> {
    let (_, mut driver) = adder_bench();
    driver.shift_in(&bits(&[0, 0, 0, 0, 0]), 0);
    driver.release_scan();
    driver.shift_in(&bits(operands), 5);
    driver.release_scan();
    ints(&driver.shift_out(0, 5).unwrap())
}

#[test]
fn test_one_plus_one() {
    assert_eq!(reference_flow(&[0, 0, 0, 1, 0, 0, 0, 1]), vec![0, 0, 0, 1, 0]);
}

#[test]
fn test_eleven_plus_fourteen() {
    assert_eq!(reference_flow(&[1, 0, 1, 1, 1, 1, 1, 0]), vec![1, 1, 0, 0, 1]);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(11, 14)]
#[case(15, 15)]
#[case(7, 9)]
fn test_run_addition(#[case] a: u64, #[case] b: u64) {
    let (chain, mut driver) = adder_bench();
    let result = run_addition(&mut driver, &chain, a, b).unwrap();
    assert_eq!(result.sum, a + b);
    assert_eq!(result.bits, to_bits_msb(a + b, 5));
}

#[test]
fn test_every_operand_pair() {
    let (chain, mut driver) = adder_bench();
    for a in 0..16 {
        for b in 0..16 {
            assert_eq!(run_addition(&mut driver, &chain, a, b).unwrap().sum, a + b);
        }
    }
}

#[test]
fn test_operand_overflow_is_rejected() {
    let (chain, mut driver) = adder_bench();
    let err = run_addition(&mut driver, &chain, 16, 0).unwrap_err();
    assert!(matches!(err, ChainError::ValueOverflow { .. }));
}

#[test]
fn test_reordered_chain_still_adds() {
    // Operands nearest scan-in, result at the far end, LSB-first layout.
    let mut text = String::new();
    for bit in 0..4 {
        text.push_str(&format!("{bit} a_reg {bit}\n"));
        text.push_str(&format!("{} b_reg {bit}\n", 4 + bit));
    }
    for bit in 0..5 {
        text.push_str(&format!("{} x_out {bit}\n", 8 + bit));
    }
    let chain = Chain::parse(&text).unwrap();
    let logic = AdderLogic::from_chain(&chain).unwrap();
    let dut = ScanDut::with_logic(chain.total_length(), 10, logic);
    let mut driver = ScanDriver::new(dut, &chain);
    assert_eq!(run_addition(&mut driver, &chain, 9, 12).unwrap().sum, 21);
}

#[test]
fn test_adder_needs_all_fields() {
    let chain = Chain::parse("0 a_reg 0\n1 b_reg 0\n").unwrap();
    assert!(matches!(
        AdderLogic::from_chain(&chain),
        Err(ChainError::UnknownField(name)) if name == "x_out"
    ));
}

#[test]
fn test_capture_truncates_to_result_width() {
    // 4-bit result: 15 + 15 = 30 keeps only 0b1110.
    let chain = Chain::parse(
        "0 x_out 0\n1 x_out 1\n2 x_out 2\n3 x_out 3\n\
         4 a_reg 0\n5 a_reg 1\n6 a_reg 2\n7 a_reg 3\n\
         8 b_reg 0\n9 b_reg 1\n10 b_reg 2\n11 b_reg 3\n",
    )
    .unwrap();
    let mut logic = AdderLogic::from_chain(&chain).unwrap();
    let mut image = chain.image();
    image.set_field(chain.field("a_reg").unwrap(), 15).unwrap();
    image.set_field(chain.field("b_reg").unwrap(), 15).unwrap();
    let mut cells = image.bits().to_vec();
    logic.capture(&mut cells);
    assert_eq!(ints(&cells[..4]), vec![0, 1, 1, 1]);
    assert_eq!(ints(&cells[4..]), vec![1; 8]);
}

#[test]
fn test_capture_ignores_positions_past_short_cells() {
    let chain = Chain::parse(ADDER_MAPPING).unwrap();
    let mut logic = AdderLogic::from_chain(&chain).unwrap();
    let mut cells = vec![true; 3];
    logic.capture(&mut cells);
    // Operands read as zero, so the visible result bits are cleared.
    assert_eq!(ints(&cells), vec![0, 0, 0]);
}

#[test]
fn test_adder_rejects_wide_fields() {
    let mut text: String = (0..65).map(|i| format!("{i} x_out {i}\n")).collect();
    text.push_str("65 a_reg 0\n66 b_reg 0\n");
    let chain = Chain::parse(&text).unwrap();
    assert!(matches!(
        AdderLogic::from_chain(&chain),
        Err(ChainError::FieldTooWide { width: 65, .. })
    ));
}
