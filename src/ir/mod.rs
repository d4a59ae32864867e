// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-06-18

//! Parsed-record model for the cohgen generators.
//! Re-exports the record types the parsers produce and the generators consume.

pub mod record;

pub use record::{FieldRecord, VariantRecord};
