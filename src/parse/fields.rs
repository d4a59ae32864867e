// CLASSIFICATION: COMMUNITY
// Filename: fields.rs v0.3
// Date Modified: 2026-08-02
// Author: Lukas Bower

//! Field list parser: semicolon-separated `<type> <name>` declarations.

use log::warn;

use crate::error::GenError;
use crate::ir::FieldRecord;
use crate::lex::{scrub_ident, split_pair, split_segments};

/// Parses a semicolon-separated field list, e.g. `Int32 x;String y;Bool z`.
///
/// Each segment must hold exactly a type token and a name token separated by
/// whitespace; anything else is rejected with [`GenError::MalformedField`]
/// before any rendering can observe it. Segments empty after trimming are
/// dropped, so a trailing `;` is harmless. Order is preserved and duplicate
/// field names pass through unchanged.
pub fn parse_fields(fields: &str) -> Result<Vec<FieldRecord>, GenError> {
    let mut records = Vec::new();
    for seg in split_segments(fields, ';') {
        let (ty, name) = split_pair(&seg.text).ok_or_else(|| GenError::MalformedField {
            segment: seg.text.clone(),
        })?;
        // The declared type reaches the generated conversion-function name
        // verbatim, noise characters included; emitted text is a
        // compatibility surface. Flag noise, never strip it.
        let scrubbed = scrub_ident(ty);
        if scrubbed != ty {
            warn!(
                "field `{name}`: type `{ty}` carries non-identifier characters (segment {})",
                seg.index
            );
        }
        records.push(FieldRecord::new(ty, name));
    }
    Ok(records)
}
