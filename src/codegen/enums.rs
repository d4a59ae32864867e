// CLASSIFICATION: COMMUNITY
// Filename: enums.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-06-27

//! Switch-based debug body for enum types.

use crate::ir::VariantRecord;

/// Message passed to `UNREACHABLE` when a value matches no declared variant.
pub const FALLBACK_DIAGNOSTIC: &str = "unknown variant";

/// Emits the body of a debug function returning each variant's name.
///
/// Variants appear as `case` arms in declaration order; the `default` arm is
/// always last. The body has no trailing newline so callers control the
/// surrounding layout.
pub fn generate_enum_debug(variants: &[VariantRecord]) -> String {
    let mut body = String::new();
    body.push_str("switch (self) {\n");
    for variant in variants {
        body.push_str("    case ");
        body.push_str(&variant.name);
        body.push_str(":\n");
        body.push_str("        return \"");
        body.push_str(&variant.name);
        body.push_str("\";\n");
    }
    body.push_str("    default:\n");
    body.push_str("        UNREACHABLE(\"");
    body.push_str(FALLBACK_DIAGNOSTIC);
    body.push_str("\");\n");
    body.push('}');
    body
}
