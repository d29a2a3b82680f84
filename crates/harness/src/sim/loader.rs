//! Mapping description loader.
//!
//! Reads a `<position> <field> <bit>` description from disk and builds the chain.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::chain::Chain;
use crate::common::ChainError;

/// Reads a mapping description file into a string.
///
/// # Arguments
///
/// * `path` - Path to the description (typically the scan-insertion `.log`).
pub fn read_description(path: impl AsRef<Path>) -> Result<String, ChainError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ChainError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and builds the chain described by the file at `path`.
///
/// # Arguments
///
/// * `path` - Path to the description.
///
/// # Returns
///
/// The built chain, or the first read or parse error.
pub fn load_chain(path: impl AsRef<Path>) -> Result<Chain, ChainError> {
    let path = path.as_ref();
    let chain = Chain::parse(&read_description(path)?)?;
    info!(path = %path.display(), total_length = chain.total_length(), "loaded scan mapping");
    Ok(chain)
}
