// CLASSIFICATION: COMMUNITY
// Filename: structs.rs v0.2
// Date Modified: 2026-07-25
// Author: Lukas Bower

//! Formatted debug body for struct types.

use crate::codegen::template::CallTemplate;
use crate::ir::FieldRecord;

/// Name prefix of the per-type conversion functions the emitted body calls.
pub const DEBUG_FN_PREFIX: &str = "to_string__Debug__";

/// Emits the body of a debug function formatting each field of a struct.
///
/// Each field contributes one `name = {Sr}` line and one conversion-call
/// argument reading through `self->`. The declared field type lands in the
/// conversion-function name verbatim. A field-free struct renders the bare
/// receiver braces with no argument list.
pub fn generate_struct_debug(fields: &[FieldRecord], struct_name: &str) -> String {
    let mut tpl = CallTemplate::new(struct_name);
    for field in fields {
        let arg = format!("{DEBUG_FN_PREFIX}{}(self->{})", field.ty, field.name);
        tpl.push_slot(&field.name, arg);
    }
    tpl.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_body_is_byte_exact() {
        let fields = vec![
            FieldRecord::new("Int32", "x"),
            FieldRecord::new("Int32", "y"),
        ];
        assert_eq!(
            generate_struct_debug(&fields, "Point"),
            "return format__String(\"Point{\\n x = {Sr},\\n y = {Sr},\\n}\", \
             to_string__Debug__Int32(self->x), to_string__Debug__Int32(self->y));"
        );
    }

    #[test]
    fn field_free_struct_renders_empty_braces() {
        assert_eq!(
            generate_struct_debug(&[], "Point"),
            "return format__String(\"Point{\\n}\");"
        );
    }

    #[test]
    fn conversion_call_tracks_declared_type() {
        let fields = vec![FieldRecord::new("String", "label")];
        let body = generate_struct_debug(&fields, "Tag");
        assert!(body.contains("to_string__Debug__String(self->label)"));
    }

    #[test]
    fn slot_count_matches_field_count() {
        let fields = vec![
            FieldRecord::new("Int32", "a"),
            FieldRecord::new("Bool", "b"),
            FieldRecord::new("String", "c"),
        ];
        let body = generate_struct_debug(&fields, "Mix");
        assert_eq!(body.matches("{Sr}").count(), 3);
        assert_eq!(body.matches("self->").count(), 3);
    }
}
