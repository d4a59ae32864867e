// CLASSIFICATION: COMMUNITY
// Filename: template.rs v0.2
// Date Modified: 2026-07-25
// Author: Lukas Bower

//! Structured call-expression template for formatted debug dumps.
//!
//! Keeps the format lines and their arguments as one ordered list so the
//! rendered format portion and argument list cannot drift apart, and so
//! separator handling lives in a single joining routine instead of
//! trailing-trim slicing.

/// Format slot understood by the target `format__String` runtime: a consumed
/// heap string.
pub const SLOT: &str = "{Sr}";

/// One `name = {Sr}` line of the format portion and the call expression
/// filling its slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotLine {
    /// Label printed before the `=`.
    pub label: String,
    /// Call expression supplying the slot's value.
    pub arg: String,
}

/// Ordered template for a `return format__String(...)` statement.
#[derive(Clone, Debug)]
pub struct CallTemplate {
    receiver: String,
    lines: Vec<SlotLine>,
}

impl CallTemplate {
    /// Starts a template for the named receiver type.
    pub fn new(receiver: impl Into<String>) -> Self {
        CallTemplate {
            receiver: receiver.into(),
            lines: Vec::new(),
        }
    }

    /// Appends one labeled slot line and the argument that fills it.
    pub fn push_slot(&mut self, label: impl Into<String>, arg: impl Into<String>) {
        self.lines.push(SlotLine {
            label: label.into(),
            arg: arg.into(),
        });
    }

    /// Renders the complete statement.
    ///
    /// The `\n` sequences are emitted as two characters each; the output is
    /// pasted into C source, not printed directly. Zero lines render a call
    /// with an empty placeholder body and no arguments after the format
    /// string.
    pub fn render(&self) -> String {
        let mut fmt = String::new();
        fmt.push_str(&self.receiver);
        fmt.push('{');
        for line in &self.lines {
            fmt.push_str("\\n ");
            fmt.push_str(&line.label);
            fmt.push_str(" = ");
            fmt.push_str(SLOT);
            fmt.push(',');
        }
        fmt.push_str("\\n}");

        let args = comma_join(self.lines.iter().map(|line| line.arg.as_str()));
        if args.is_empty() {
            format!("return format__String(\"{fmt}\");")
        } else {
            format!("return format__String(\"{fmt}\", {args});")
        }
    }
}

/// Joins parts with `, `, yielding an empty string for an empty collection.
pub fn comma_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts.into_iter().collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lines_and_args_in_step() {
        let mut tpl = CallTemplate::new("Point");
        tpl.push_slot("x", "get_x()");
        tpl.push_slot("y", "get_y()");
        assert_eq!(
            tpl.render(),
            "return format__String(\"Point{\\n x = {Sr},\\n y = {Sr},\\n}\", get_x(), get_y());"
        );
    }

    #[test]
    fn empty_template_has_no_dangling_separator() {
        let tpl = CallTemplate::new("Unit");
        assert_eq!(tpl.render(), "return format__String(\"Unit{\\n}\");");
    }

    #[test]
    fn join_handles_empty_and_single() {
        let none: [&str; 0] = [];
        assert_eq!(comma_join(none), "");
        assert_eq!(comma_join(["a"]), "a");
        assert_eq!(comma_join(["a", "b"]), "a, b");
    }
}
