// CLASSIFICATION: COMMUNITY
// Filename: record.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-07-02

//! Records produced by the list parsers.
//!
//! A record lives for one generation call: created by a parser, consumed by
//! a generator, never cached or shared.

/// One named alternative of an enumerated type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantRecord {
    /// Variant identifier, free of whitespace.
    pub name: String,
}

impl VariantRecord {
    /// Creates a record from an already-normalized name.
    pub fn new(name: impl Into<String>) -> Self {
        VariantRecord { name: name.into() }
    }
}

/// One `<type> <name>` declaration from a struct field list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRecord {
    /// Field identifier.
    pub name: String,
    /// Declared type name. Carried verbatim into generated output, where it
    /// selects the per-type conversion function.
    pub ty: String,
}

impl FieldRecord {
    /// Creates a record from a declaration's type and name tokens, in
    /// declaration order.
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        FieldRecord {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
