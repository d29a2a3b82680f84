//! Common utilities and types used throughout the harness.
//!
//! This module provides the building blocks shared by the chain model, the protocol,
//! and the reference DUT. It includes:
//! 1. **Bits:** Conversions between integers and most-significant-first bit lists.
//! 2. **Error Handling:** The library error type and malformed-description reasons.

/// Bit list helpers.
pub mod bits;

/// Error types.
pub mod error;

pub use bits::{format_bits, from_bits_msb, parse_bits, to_bits_msb};
pub use error::{ChainError, MalformedReason};
