//! Bit list helpers.
//!
//! Stimulus and responses travel as `bool` slices. Test flows write operands
//! most-significant bit first, so these helpers convert in that order.

/// Expands the low `width` bits of `value` into a list, most significant first.
///
/// Bits above `width` are ignored; widths over 64 pad with leading zeros.
pub fn to_bits_msb(value: u64, width: usize) -> Vec<bool> {
    (0..width)
        .rev()
        .map(|i| i < 64 && (value >> i) & 1 == 1)
        .collect()
}

/// Folds a most-significant-first bit list back into an integer.
///
/// Only the last 64 bits contribute.
pub fn from_bits_msb(bits: &[bool]) -> u64 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | u64::from(b))
}

/// Parses a string of `0`/`1` characters; `_` separators are skipped.
///
/// Returns `None` on any other character.
pub fn parse_bits(text: &str) -> Option<Vec<bool>> {
    text.chars()
        .filter(|&c| c != '_')
        .map(|c| match c {
            '0' => Some(false),
            '1' => Some(true),
            _ => None,
        })
        .collect()
}

/// Renders bits as a `0`/`1` string in list order.
pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
