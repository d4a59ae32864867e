// CLASSIFICATION: COMMUNITY
// Filename: prompt.rs v0.2
// Date Modified: 2026-08-12
// Author: Lukas Bower

//! Interactive request builder.
//!
//! Drives a short question-and-answer session over any `BufRead`/`Write`
//! pair. Prompts go to the writer, so the caller can keep stdout clean for
//! the generated body by handing in stderr.

use std::io::{BufRead, Write};

use crate::codegen::{Kind, Request};
use crate::error::GenError;

/// Unrecognized kind answers tolerated before the session gives up.
const KIND_ATTEMPTS: usize = 3;

/// Runs the full session and returns the assembled request.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Request, GenError> {
    let kind = ask_kind(input, output)?;
    match kind {
        Kind::Enum => {
            let variants = ask_line(input, output, "variant list (comma-separated): ")?;
            Ok(Request::Enum { variants })
        }
        Kind::Struct => {
            let name = ask_line(input, output, "struct name: ")?;
            let fields = ask_line(input, output, "field list (`<type> <name>;...`): ")?;
            Ok(Request::Struct { name, fields })
        }
    }
}

fn ask_kind<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Kind, GenError> {
    let mut last = String::new();
    for _ in 0..KIND_ATTEMPTS {
        let answer = ask_line(input, output, "enum or struct? ")?;
        match answer.parse::<Kind>() {
            Ok(kind) => return Ok(kind),
            Err(_) => {
                writeln!(output, "answer `enum` or `struct`")?;
                last = answer;
            }
        }
    }
    Err(GenError::UnknownKind(last))
}

fn ask_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, GenError> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(GenError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before the session finished",
        )));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn enum_session_collects_variants() {
        let mut input = Cursor::new("enum\nPlus, Minus\n");
        let mut output = Vec::new();
        let request = run_session(&mut input, &mut output).unwrap();
        assert_eq!(
            request,
            Request::Enum {
                variants: "Plus, Minus".into()
            }
        );
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("enum or struct?"));
        assert!(transcript.contains("variant list"));
    }

    #[test]
    fn struct_session_collects_name_then_fields() {
        let mut input = Cursor::new("struct\nPoint\nInt32 x;Int32 y\n");
        let mut output = Vec::new();
        let request = run_session(&mut input, &mut output).unwrap();
        assert_eq!(
            request,
            Request::Struct {
                name: "Point".into(),
                fields: "Int32 x;Int32 y".into()
            }
        );
    }

    #[test]
    fn bad_kind_answers_are_retried() {
        let mut input = Cursor::new("union\ne\nA\n");
        let mut output = Vec::new();
        let request = run_session(&mut input, &mut output).unwrap();
        assert_eq!(request.kind(), Kind::Enum);
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("answer `enum` or `struct`"));
    }

    #[test]
    fn session_gives_up_after_repeated_bad_kinds() {
        let mut input = Cursor::new("x\ny\nz\n");
        let mut output = Vec::new();
        let err = run_session(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, GenError::UnknownKind(s) if s == "z"));
    }

    #[test]
    fn closed_input_is_reported_not_looped() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = run_session(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, GenError::Io(_)));
    }
}
