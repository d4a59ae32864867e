// CLASSIFICATION: COMMUNITY
// Filename: error.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-07-30

//! Error type shared across cohgen parsing, generation, and drivers.

use thiserror::Error;

/// Errors surfaced by cohgen.
#[derive(Debug, Error)]
pub enum GenError {
    /// A field segment did not split into a `<type> <name>` pair.
    #[error("malformed field segment `{segment}`: expected `<type> <name>`")]
    MalformedField {
        /// The offending segment, trimmed.
        segment: String,
    },
    /// The supplied kind named neither generator.
    #[error("unknown generator kind `{0}`, expected `enum` or `struct`")]
    UnknownKind(String),
    /// A subcommand supplied neither inline list text nor `--from`.
    #[error("no input: pass the list inline or use --from <FILE>")]
    MissingInput,
    /// Underlying file or stream failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A TOML test manifest could not be parsed.
    #[error("manifest parse error: {0}")]
    ManifestToml(#[from] toml::de::Error),
    /// A JSON test manifest could not be parsed.
    #[error("manifest parse error: {0}")]
    ManifestJson(#[from] serde_json::Error),
}
