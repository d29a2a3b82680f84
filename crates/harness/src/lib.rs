//! Scan-chain test harness library.
//!
//! This crate drives a scan-inserted design through its serial test port with the following:
//! 1. **Chain model:** Parses a bit-index mapping description into named fields and their absolute chain positions.
//! 2. **Protocol:** Shifts values into and out of chain positions over a clocked serial line, accounting for shift latency.
//! 3. **Port:** The pin-level `ScanPort` trait the protocol is layered on.
//! 4. **Simulation:** A behavioral scan DUT, functional capture logic, and mapping-file loading.
//! 5. **Support:** Configuration, error types, and shift statistics.

/// Common types (bit helpers, error types).
pub mod common;
/// Harness configuration (defaults, hierarchical config structures).
pub mod config;
/// Chain model (fields, chain, chain images, mapping description parsing).
pub mod chain;
/// Hardware interface consumed by the protocol.
pub mod port;
/// Chain I/O protocol (driver carrying the chain length).
pub mod protocol;
/// Reference scan DUT, capture logic, and mapping loader.
pub mod sim;
/// Shift statistics collection and reporting.
pub mod stats;

/// Chain model built from a mapping description.
pub use crate::chain::{Chain, ChainImage, Field};
/// Library error type.
pub use crate::common::error::ChainError;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Pin-level hardware interface.
pub use crate::port::ScanPort;
/// Protocol driver; construct with `ScanDriver::new`.
pub use crate::protocol::ScanDriver;
