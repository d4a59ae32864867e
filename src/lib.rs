// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.3
// Date Modified: 2026-08-14
// Author: Lukas Bower

//! Debug-body generation helper for the bootstrap C runtime.
//!
//! Turns a short description of an enum or struct into the body of its
//! `to_string__Debug__*` function, ready to paste into the hand-written C
//! sources. Parsing and emission are plain string-in, string-out functions;
//! the binaries own all I/O.

/// Input lexing: segment splitting and token cleanup.
pub mod lex;

/// Parsed declaration records.
pub mod ir;

/// List-text parsers producing IR records.
pub mod parse;

/// Body generators, the call template and request dispatch.
pub mod codegen;

/// Error taxonomy shared across the crate.
pub mod error;

/// Append-only invocation log and its macros.
pub mod logging;

/// CLI surface and input resolution rules.
pub mod config;

/// File-backed list input.
pub mod input;

/// Interactive session driving a [`Request`] out of a terminal user.
pub mod prompt;

/// Self-test harness: manifest model and case runner.
pub mod testrun;

pub use codegen::{dispatch, Kind, Request};
pub use error::GenError;

/// Generates an enum debug body from a comma-separated variant list.
///
/// Parsing cannot fail: unusable segments are dropped, so the worst case is
/// a body containing only the `default` arm.
pub fn generate_enum_debug_body(variants_text: &str) -> String {
    let records = parse::parse_variants(variants_text);
    log::debug!("enum request: {} variant(s)", records.len());
    codegen::generate_enum_debug(&records)
}

/// Generates a struct debug body from a struct name and a semicolon-separated
/// `<type> <name>` field list.
pub fn generate_struct_debug_body(struct_name: &str, fields_text: &str) -> Result<String, GenError> {
    let records = parse::parse_fields(fields_text)?;
    log::debug!("struct request: `{struct_name}`, {} field(s)", records.len());
    Ok(codegen::generate_struct_debug(&records, struct_name))
}
