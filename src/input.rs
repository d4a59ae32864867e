// CLASSIFICATION: COMMUNITY
// Filename: input.rs v0.1
// Date Modified: 2026-07-11
// Author: Lukas Bower

//! File-backed list input.

use std::fs;
use std::path::Path;

use crate::error::GenError;

/// Reads a variant or field list from a file.
///
/// The whole file is the list; parsers treat newlines like any other
/// whitespace, so multi-line lists work unchanged.
pub fn read_list_file(path: &Path) -> Result<String, GenError> {
    let text = fs::read_to_string(path)?;
    log::debug!("read {} byte(s) from {}", text.len(), path.display());
    Ok(text)
}
