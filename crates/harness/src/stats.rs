//! Shift statistics collection and reporting.
//!
//! This module tracks what the protocol driver has done to the scan port. It provides:
//! 1. **Clocking:** Total clock pulses issued.
//! 2. **Traffic:** Bits presented on scan-in and bits sampled from scan-out.
//! 3. **Operations:** Shift operations and scan hand-offs issued.

/// Counters kept by `ScanDriver`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShiftStats {
    /// Clock pulses issued, including priming and positioning pulses.
    pub clock_pulses: u64,
    /// Shift operations issued (`shift_in*`, `shift_out*`).
    pub operations: u64,
    /// Data bits presented on scan-in.
    pub bits_in: u64,
    /// Bits sampled from scan-out.
    pub bits_out: u64,
    /// Scan hand-offs (scan-enable low plus one pulse).
    pub releases: u64,
}

impl ShiftStats {
    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Prints the counters to stdout.
    pub fn print(&self) {
        let ops = self.operations.max(1);
        println!("\n==========================================================");
        println!("SCAN CHAIN SHIFT STATISTICS");
        println!("==========================================================");
        println!("clock_pulses             {}", self.clock_pulses);
        println!("operations               {}", self.operations);
        println!("pulses_per_op            {:.2}", self.clock_pulses as f64 / ops as f64);
        println!("bits.scan_in             {}", self.bits_in);
        println!("bits.scan_out            {}", self.bits_out);
        println!("scan_releases            {}", self.releases);
        println!("==========================================================");
    }
}
