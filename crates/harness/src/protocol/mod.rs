//! Chain I/O protocol.
//!
//! `ScanDriver` shifts values into and out of chain positions over a `ScanPort`. It performs:
//! 1. **Shift-in:** Single-bit prefix fill (`shift_in_one`) and block placement (`shift_in`).
//! 2. **Shift-out:** Single-bit (`shift_out_one`) and block (`shift_out`) reads.
//! 3. **Hand-off:** `release_scan`, returning the design to functional mode for one pulse.
//!
//! # Pin model
//!
//! Scan-in feeds position 0. Every pulse with scan-enable high moves each bit one position
//! toward the end of the chain. Scan-out is registered behind the last position: after a
//! pulse it shows the bit that occupied position `chain_length - 1` before that pulse. A bit
//! at position `k` therefore reaches scan-out after `chain_length - k` pulses.
//! Mapping descriptions number positions the same way (0 is the first flip-flop after
//! scan-in), since that is the only orientation in which these pulse counts place and recover
//! bits at the positions the description names.
//!
//! # State
//!
//! Every operation raises scan-enable and leaves it high. The caller lowers it (usually with
//! `release_scan`) before resuming functional operation. Operations must be strictly
//! sequenced; aborting one part-way leaves the chain partially shifted.

use tracing::{debug, trace, warn};

use crate::chain::Chain;
use crate::common::ChainError;
use crate::port::ScanPort;
use crate::stats::ShiftStats;

/// Protocol driver bound to one port and one chain length.
#[derive(Debug)]
pub struct ScanDriver<P: ScanPort> {
    port: P,
    chain_length: usize,
    stats: ShiftStats,
}

impl<P: ScanPort> ScanDriver<P> {
    /// Creates a driver for `chain` on `port`.
    pub fn new(port: P, chain: &Chain) -> Self {
        Self::with_length(port, chain.total_length())
    }

    /// Creates a driver for a chain of `chain_length` flip-flops.
    pub fn with_length(port: P, chain_length: usize) -> Self {
        Self {
            port,
            chain_length,
            stats: ShiftStats::default(),
        }
    }

    /// Number of flip-flops between scan-in and scan-out.
    pub const fn chain_length(&self) -> usize {
        self.chain_length
    }

    /// Counters for everything issued so far.
    pub const fn stats(&self) -> &ShiftStats {
        &self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// The underlying port.
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// The underlying port, mutably. Pin changes made here bypass the counters.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Consumes the driver and returns the port.
    pub fn into_port(self) -> P {
        self.port
    }

    /// Places `bit` at `target` by holding it on scan-in for `target + 1` pulses.
    ///
    /// Every position from 0 through `target` ends up holding `bit`; use it to clear a
    /// prefix, never to place distinct values.
    pub fn shift_in_one(&mut self, bit: bool, target: usize) {
        let pulses = target.saturating_add(1);
        debug!(bit, target, pulses, "shift_in_one");
        if target >= self.chain_length {
            warn!(
                target,
                chain_length = self.chain_length,
                "shift_in_one target past the chain end"
            );
        }
        self.begin();
        self.port.set_scan_in(bit);
        self.stats.bits_in += 1;
        self.pulse(pulses);
    }

    /// Places `values` so that `values[i]` lands at position `target + i`.
    ///
    /// One priming pulse, then `values` presented last element first with one pulse each,
    /// then `target` positioning pulses. An empty `values` issues only the priming pulse.
    /// Positions below `target` are overwritten with copies of `values[0]`.
    pub fn shift_in(&mut self, values: &[bool], target: usize) {
        debug!(len = values.len(), target, "shift_in");
        if target.saturating_add(values.len()) > self.chain_length {
            warn!(
                target,
                len = values.len(),
                chain_length = self.chain_length,
                "shift_in block runs past the chain end; trailing bits fall out"
            );
        }
        self.begin();
        self.pulse(1);
        if values.is_empty() {
            return;
        }
        for &bit in values.iter().rev() {
            self.port.set_scan_in(bit);
            self.stats.bits_in += 1;
            self.pulse(1);
        }
        self.pulse(target);
    }

    /// Reads the bit at `target` after `chain_length - target` pulses.
    ///
    /// Destructive: the whole chain moves by that many positions.
    pub fn shift_out_one(&mut self, target: usize) -> Result<bool, ChainError> {
        if target >= self.chain_length {
            return Err(ChainError::ContractViolation(format!(
                "shift_out_one target {target} is outside a {}-bit chain",
                self.chain_length
            )));
        }
        let pulses = self.chain_length - target;
        debug!(target, pulses, "shift_out_one");
        self.begin();
        self.pulse(pulses);
        Ok(self.sample())
    }

    /// Reads positions `target..target + length`, returned in position order.
    ///
    /// Pre-positions the last bit of the block at scan-out with
    /// `chain_length - (target + length) + 1` pulses, then samples before each of `length`
    /// further pulses, filling the result back to front. Reading back right after
    /// `shift_in(values, target)` and a hand-off returns `values`.
    ///
    /// Fails with `ContractViolation` if the block extends past the chain.
    pub fn shift_out(&mut self, target: usize, length: usize) -> Result<Vec<bool>, ChainError> {
        let end = target
            .checked_add(length)
            .filter(|&end| end <= self.chain_length)
            .ok_or_else(|| {
                ChainError::ContractViolation(format!(
                    "shift_out block {target}+{length} runs past a {}-bit chain",
                    self.chain_length
                ))
            })?;
        let lead = self.chain_length - end + 1;
        debug!(target, length, lead, "shift_out");
        self.begin();
        self.pulse(lead);

        let mut out = vec![false; length];
        for slot in out.iter_mut().rev() {
            *slot = self.sample();
            self.pulse(1);
        }
        Ok(out)
    }

    /// Lowers scan-enable and issues one pulse so the design runs one functional cycle.
    pub fn release_scan(&mut self) {
        debug!("release_scan");
        self.port.set_scan_enable(false);
        self.pulse(1);
        self.stats.releases += 1;
    }

    fn begin(&mut self) {
        self.stats.operations += 1;
        self.port.set_scan_enable(true);
    }

    fn sample(&mut self) -> bool {
        self.stats.bits_out += 1;
        self.port.read_scan_out()
    }

    fn pulse(&mut self, count: usize) {
        for _ in 0..count {
            self.port.advance_clock();
            trace!(pulse = self.stats.clock_pulses, "clock");
            self.stats.clock_pulses += 1;
        }
    }
}
