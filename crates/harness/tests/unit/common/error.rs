//! # Error Tests
//!
//! Display text and structure of the library error types.

use scanchain_core::common::{ChainError, MalformedReason};

#[test]
fn test_malformed_display_names_line_and_reason() {
    let err = ChainError::MalformedDescription {
        line: 7,
        reason: MalformedReason::DuplicateBit {
            field: "a_reg".into(),
            bit: 2,
        },
    };
    let text = err.to_string();
    assert!(text.contains("line 7"));
    assert!(text.contains("a_reg"));
    assert!(text.contains("bit 2"));
}

#[test]
fn test_gap_display() {
    let reason = MalformedReason::PositionGap { missing: 4 };
    assert_eq!(reason.to_string(), "position 4 is never mapped");
}

#[test]
fn test_io_error_keeps_source() {
    use std::error::Error as _;
    let err = ChainError::Io {
        path: "missing.log".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(err.to_string().contains("missing.log"));
    assert!(err.source().is_some());
}

#[test]
fn test_config_error_from_serde() {
    let err: ChainError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ChainError::Config(_)));
}

#[test]
fn test_contract_violation_display() {
    let err = ChainError::ContractViolation("too far".into());
    assert_eq!(err.to_string(), "scan contract violation: too far");
}
