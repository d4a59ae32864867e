// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-06-19

//! Input parsers turning list text into parsed records.

pub mod fields;
pub mod variants;

pub use fields::parse_fields;
pub use variants::parse_variants;
