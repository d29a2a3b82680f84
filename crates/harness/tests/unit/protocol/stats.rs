//! # Shift Statistics Tests

use pretty_assertions::assert_eq;
use scanchain_core::stats::ShiftStats;

use crate::common::harness::{bits, hold_driver};

#[test]
fn test_counters_track_operations() {
    let mut driver = hold_driver(13);
    driver.shift_in(&bits(&[1, 0, 1]), 2);
    driver.release_scan();
    let _ = driver.shift_out(2, 3).unwrap();

    let stats = *driver.stats();
    assert_eq!(
        stats,
        ShiftStats {
            clock_pulses: (1 + 3 + 2) + 1 + (9 + 3),
            operations: 2,
            bits_in: 3,
            bits_out: 3,
            releases: 1,
        }
    );
    assert_eq!(stats.clock_pulses, driver.port().rising_edges());
}

#[test]
fn test_reset_stats() {
    let mut driver = hold_driver(4);
    driver.shift_in_one(true, 3);
    assert_eq!(driver.stats().clock_pulses, 4);
    driver.reset_stats();
    assert_eq!(*driver.stats(), ShiftStats::default());
}
