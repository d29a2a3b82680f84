//! # Mapping Loader Tests

use std::io::Write;

use pretty_assertions::assert_eq;
use scanchain_core::chain::Chain;
use scanchain_core::common::{ChainError, MalformedReason};
use scanchain_core::sim::{ADDER_MAPPING, load_chain};
use tempfile::NamedTempFile;

fn write_mapping(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_adder_mapping() {
    let file = write_mapping(ADDER_MAPPING);
    let chain = load_chain(file.path()).unwrap();
    assert_eq!(chain, Chain::parse(ADDER_MAPPING).unwrap());
    assert_eq!(chain.total_length(), 13);
}

#[test]
fn test_chain_load_delegates_to_loader() {
    let file = write_mapping("0 en 0\n");
    assert_eq!(Chain::load(file.path()).unwrap().total_length(), 1);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.log");
    match load_chain(&path) {
        Err(ChainError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_reports_line() {
    let file = write_mapping("0 a 0\n1 a\n");
    match load_chain(file.path()) {
        Err(ChainError::MalformedDescription { line, reason }) => {
            assert_eq!(line, 2);
            assert_eq!(reason, MalformedReason::MissingField);
        }
        other => panic!("expected MalformedDescription, got {other:?}"),
    }
}
