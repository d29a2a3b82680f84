//! Scan port trait for the hardware interface.
//!
//! This module defines the `ScanPort` trait implemented by whatever drives the design's test pins. It provides:
//! 1. **Clocking:** `set_clock` and `wait_half_period`, composed into one full pulse by `advance_clock`.
//! 2. **Pins:** Scan-enable and scan-in writes, scan-out reads.
//!
//! Pin writes take effect for the next clock edge; the port, not the protocol, decides when the
//! design samples them. The protocol counts time only in clock pulses.

/// Pin-level access to a design's scan test port.
pub trait ScanPort {
    /// Drives the clock pin high or low.
    fn set_clock(&mut self, high: bool);
    /// Suspends the caller for half a clock period.
    fn wait_half_period(&mut self);
    /// Drives the scan-enable pin.
    fn set_scan_enable(&mut self, enabled: bool);
    /// Drives the serial scan-in pin.
    fn set_scan_in(&mut self, bit: bool);
    /// Samples the serial scan-out pin.
    fn read_scan_out(&mut self) -> bool;

    /// One full clock pulse: high, half period, low, half period.
    fn advance_clock(&mut self) {
        self.set_clock(true);
        self.wait_half_period();
        self.set_clock(false);
        self.wait_half_period();
    }
}

impl<P: ScanPort + ?Sized> ScanPort for &mut P {
    fn set_clock(&mut self, high: bool) {
        (**self).set_clock(high);
    }
    fn wait_half_period(&mut self) {
        (**self).wait_half_period();
    }
    fn set_scan_enable(&mut self, enabled: bool) {
        (**self).set_scan_enable(enabled);
    }
    fn set_scan_in(&mut self, bit: bool) {
        (**self).set_scan_in(bit);
    }
    fn read_scan_out(&mut self) -> bool {
        (**self).read_scan_out()
    }
    fn advance_clock(&mut self) {
        (**self).advance_clock();
    }
}
