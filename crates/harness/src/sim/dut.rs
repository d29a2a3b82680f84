//! Behavioral scan DUT.
//!
//! A software model of a scan-inserted design, used to exercise the protocol without an
//! HDL simulator. It models:
//! 1. **Scan cells:** One flip-flop per chain position, muxed between shift and functional input.
//! 2. **Edges:** State changes only on a rising clock edge; pin writes are sampled there.
//! 3. **Scan-out:** A flop behind the last cell, updated on every rising edge.
//! 4. **Time:** A nanosecond counter advanced by `wait_half_period`.

use tracing::trace;

use crate::port::ScanPort;

/// Next-state logic for the design's functional mode (scan-enable low).
pub trait CaptureLogic {
    /// Updates `cells` (one per chain position) for one functional clock edge.
    fn capture(&mut self, cells: &mut [bool]);
}

/// Functional mode that holds every cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoldLogic;

impl CaptureLogic for HoldLogic {
    fn capture(&mut self, _cells: &mut [bool]) {}
}

/// Scan-inserted design driven through its test pins.
#[derive(Clone, Debug)]
pub struct ScanDut<L: CaptureLogic = HoldLogic> {
    cells: Vec<bool>,
    logic: L,
    clock: bool,
    scan_enable: bool,
    scan_in: bool,
    scan_out: bool,
    half_period_ns: u64,
    time_ns: u64,
    rising_edges: u64,
}

impl ScanDut<HoldLogic> {
    /// Creates a design of `length` cells whose functional mode holds state.
    pub fn new(length: usize, half_period_ns: u64) -> Self {
        Self::with_logic(length, half_period_ns, HoldLogic)
    }
}

impl<L: CaptureLogic> ScanDut<L> {
    /// Creates a design of `length` cells with the given functional logic. All cells start at 0.
    pub fn with_logic(length: usize, half_period_ns: u64, logic: L) -> Self {
        Self {
            cells: vec![false; length],
            logic,
            clock: false,
            scan_enable: false,
            scan_in: false,
            scan_out: false,
            half_period_ns,
            time_ns: 0,
            rising_edges: 0,
        }
    }

    /// Current cell contents, position 0 first.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Overwrites cell contents (backdoor load). Extra bits are dropped.
    pub fn load_cells(&mut self, bits: &[bool]) {
        for (cell, &bit) in self.cells.iter_mut().zip(bits) {
            *cell = bit;
        }
    }

    /// Functional logic.
    pub const fn logic(&self) -> &L {
        &self.logic
    }

    /// Simulated time in nanoseconds.
    pub const fn time_ns(&self) -> u64 {
        self.time_ns
    }

    /// Rising clock edges seen so far.
    pub const fn rising_edges(&self) -> u64 {
        self.rising_edges
    }

    /// Current scan-enable pin level.
    pub const fn scan_enabled(&self) -> bool {
        self.scan_enable
    }

    fn rising_edge(&mut self) {
        self.rising_edges += 1;
        let last = self.cells.last().copied().unwrap_or(self.scan_in);
        if self.scan_enable {
            if !self.cells.is_empty() {
                self.cells.rotate_right(1);
                self.cells[0] = self.scan_in;
            }
        } else {
            self.logic.capture(&mut self.cells);
        }
        self.scan_out = last;
        trace!(edge = self.rising_edges, scan = self.scan_enable, "dut edge");
    }
}

impl<L: CaptureLogic> ScanPort for ScanDut<L> {
    fn set_clock(&mut self, high: bool) {
        let rising = high && !self.clock;
        self.clock = high;
        if rising {
            self.rising_edge();
        }
    }

    fn wait_half_period(&mut self) {
        self.time_ns += self.half_period_ns;
    }

    fn set_scan_enable(&mut self, enabled: bool) {
        self.scan_enable = enabled;
    }

    fn set_scan_in(&mut self, bit: bool) {
        self.scan_in = bit;
    }

    fn read_scan_out(&mut self) -> bool {
        self.scan_out
    }
}
