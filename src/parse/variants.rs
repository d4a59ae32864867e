// CLASSIFICATION: COMMUNITY
// Filename: variants.rs v0.2
// Date Modified: 2026-07-21
// Author: Lukas Bower

//! Variant list parser: comma-separated identifiers into records.

use crate::ir::VariantRecord;
use crate::lex::{collapse_ws, split_segments};

/// Parses a comma-separated variant list, e.g. `Red, Green, Blue`.
///
/// Each kept segment is collapsed to one contiguous token (all whitespace
/// removed, internal included). Order is preserved and duplicates pass
/// through unchanged; emitting duplicate `case` labels is a caller contract
/// violation, not a parse failure. Empty or all-whitespace input yields an
/// empty sequence; this parser never fails.
pub fn parse_variants(variants: &str) -> Vec<VariantRecord> {
    split_segments(variants, ',')
        .into_iter()
        .map(|seg| VariantRecord::new(collapse_ws(&seg.text)))
        .collect()
}
