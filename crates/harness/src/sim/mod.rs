//! Simulation support.
//!
//! Provides a behavioral scan DUT that implements `ScanPort`, functional capture
//! logic for it, and loading of mapping descriptions from disk.

pub mod adder;
pub mod dut;
pub mod loader;

pub use adder::{ADDER_MAPPING, AdderLogic, Addition, run_addition};
pub use dut::{CaptureLogic, HoldLogic, ScanDut};
pub use loader::load_chain;
