// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-09

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::GenError;
use crate::input;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(long)]
    pub trace: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Emit an enum debug body from a comma-separated variant list.
    Enum {
        /// Inline variant list, e.g. `Plus, Minus, Star`.
        #[arg(conflicts_with = "from")]
        variants: Option<String>,
        /// Read the variant list from a file instead.
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },
    /// Emit a struct debug body from a name and a `<type> <name>;` field list.
    Struct {
        /// Struct name as it appears in the emitted format string.
        name: String,
        /// Inline field list, e.g. `Int32 x;String y`.
        #[arg(conflicts_with = "from")]
        fields: Option<String>,
        /// Read the field list from a file instead.
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },
    /// Ask for the kind and lists interactively.
    Prompt,
}

/// Picks the list text from an inline argument or a `--from` file.
///
/// Inline text wins when both are somehow present; clap's conflict rule
/// keeps that combination out of real invocations.
pub fn resolve_list_text(
    inline: Option<String>,
    from: Option<PathBuf>,
) -> Result<String, GenError> {
    match (inline, from) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => input::read_list_file(&path),
        (None, None) => Err(GenError::MissingInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_passes_through() {
        assert_eq!(resolve_list_text(Some("A, B".into()), None).unwrap(), "A, B");
    }

    #[test]
    fn neither_source_is_an_error() {
        let err = resolve_list_text(None, None).unwrap_err();
        assert!(matches!(err, GenError::MissingInput));
    }

    #[test]
    fn file_source_is_read() {
        let path = std::env::temp_dir().join(format!("cohgen-cfg-{}.txt", std::process::id()));
        std::fs::write(&path, "Int32 x").unwrap();
        assert_eq!(resolve_list_text(None, Some(path.clone())).unwrap(), "Int32 x");
        let _ = std::fs::remove_file(&path);
    }
}
