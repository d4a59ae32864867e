// CLASSIFICATION: COMMUNITY
// Filename: dispatch.rs v0.2
// Date Modified: 2026-08-05
// Author: Lukas Bower

//! Request model and generator dispatch.
//!
//! Callers decide which generator runs by constructing the matching
//! [`Request`]; the generators themselves never inspect the environment or
//! any input stream.

use std::str::FromStr;

use crate::error::GenError;

/// The two declaration shapes a debug body can be generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Enum,
    Struct,
}

impl Kind {
    /// Stable lowercase name used in logs and messages.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Enum => "enum",
            Kind::Struct => "struct",
        }
    }
}

impl FromStr for Kind {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enum" | "e" => Ok(Kind::Enum),
            "struct" | "s" => Ok(Kind::Struct),
            _ => Err(GenError::UnknownKind(s.trim().to_string())),
        }
    }
}

/// One fully described generation job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Emit an enum body from a comma-separated variant list.
    Enum { variants: String },
    /// Emit a struct body from a name and a semicolon-separated field list.
    Struct { name: String, fields: String },
}

impl Request {
    pub fn kind(&self) -> Kind {
        match self {
            Request::Enum { .. } => Kind::Enum,
            Request::Struct { .. } => Kind::Struct,
        }
    }
}

/// Runs the generator matching the request, returning the emitted body.
pub fn dispatch(request: &Request) -> Result<String, GenError> {
    match request {
        Request::Enum { variants } => Ok(crate::generate_enum_debug_body(variants)),
        Request::Struct { name, fields } => crate::generate_struct_debug_body(name, fields),
    }
}
