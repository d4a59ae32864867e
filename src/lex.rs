// CLASSIFICATION: COMMUNITY
// Filename: lex.rs v0.1
// Date Modified: 2026-06-18
// Author: Lukas Bower

//! Segment lexer shared by the variant and field list parsers.
//!
//! Everything here is a pure function of its input: delimiter split, then
//! whitespace trim, with no pattern matching beyond that.

/// One trimmed, non-empty piece of a delimiter-separated list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Trimmed text of the segment.
    pub text: String,
    /// Zero-based position of the segment in the original list, counting
    /// dropped empties.
    pub index: usize,
}

/// Split `input` on `delim`, trim each piece, and drop pieces that are empty
/// after trimming.
///
/// A piece consisting of a lone space (the artifact a `", "`-delimited list
/// leaves behind) is empty after trimming and falls out here with the rest.
/// Order is preserved; an empty or all-whitespace `input` yields no segments.
pub fn split_segments(input: &str, delim: char) -> Vec<Segment> {
    input
        .split(delim)
        .enumerate()
        .filter_map(|(index, piece)| {
            let text = piece.trim();
            if text.is_empty() {
                None
            } else {
                Some(Segment {
                    text: text.to_string(),
                    index,
                })
            }
        })
        .collect()
}

/// Remove all whitespace from `s`, surrounding and internal.
pub fn collapse_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Split a segment at whitespace into exactly two tokens.
///
/// Returns `None` when there is no whitespace boundary, or when more than
/// two tokens are present; multi-word types are not part of the input
/// contract.
pub fn split_pair(s: &str) -> Option<(&str, &str)> {
    let mut tokens = s.split_whitespace();
    let first = tokens.next()?;
    let second = tokens.next()?;
    match tokens.next() {
        None => Some((first, second)),
        Some(_) => None,
    }
}

/// Best-effort identifier cleanup: keep ASCII alphanumerics and `_`, drop
/// everything else.
pub fn scrub_ident(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
