// CLASSIFICATION: COMMUNITY
// Filename: cli.rs v0.2
// Date Modified: 2026-08-18
// Author: Lukas Bower

use clap::Parser;

use cohgen::config::{resolve_list_text, Cli, Command};
use cohgen::GenError;

#[test]
fn enum_subcommand_takes_an_inline_list() {
    let cli = Cli::try_parse_from(["cohgen", "enum", "Plus, Minus"]).expect("cli args parse");
    match cli.command {
        Command::Enum { variants, from } => {
            assert_eq!(variants.as_deref(), Some("Plus, Minus"));
            assert!(from.is_none());
        }
        _ => panic!("expected the enum subcommand"),
    }
}

#[test]
fn struct_subcommand_takes_name_then_fields() {
    let cli =
        Cli::try_parse_from(["cohgen", "struct", "Point", "Int32 x;Int32 y"]).expect("parse");
    match cli.command {
        Command::Struct { name, fields, from } => {
            assert_eq!(name, "Point");
            assert_eq!(fields.as_deref(), Some("Int32 x;Int32 y"));
            assert!(from.is_none());
        }
        _ => panic!("expected the struct subcommand"),
    }
}

#[test]
fn struct_subcommand_requires_a_name() {
    assert!(Cli::try_parse_from(["cohgen", "struct"]).is_err());
}

#[test]
fn inline_list_conflicts_with_from() {
    let parsed = Cli::try_parse_from(["cohgen", "enum", "A, B", "--from", "list.txt"]);
    assert!(parsed.is_err());
}

#[test]
fn from_alone_parses() {
    let cli = Cli::try_parse_from(["cohgen", "enum", "--from", "list.txt"]).expect("parse");
    match cli.command {
        Command::Enum { variants, from } => {
            assert!(variants.is_none());
            assert_eq!(from.expect("path").to_str(), Some("list.txt"));
        }
        _ => panic!("expected the enum subcommand"),
    }
}

#[test]
fn trace_flag_precedes_the_subcommand() {
    let cli = Cli::try_parse_from(["cohgen", "--trace", "prompt"]).expect("parse");
    assert!(cli.trace);
    assert!(matches!(cli.command, Command::Prompt));
}

#[test]
fn resolution_reads_the_from_file() {
    let path = std::env::temp_dir().join(format!("cohgen-clitest-{}.txt", std::process::id()));
    std::fs::write(&path, "Red, Green, Blue").expect("write list");
    let text = resolve_list_text(None, Some(path.clone())).expect("file resolves");
    assert_eq!(text, "Red, Green, Blue");
    let _ = std::fs::remove_file(&path);
}

#[test]
fn resolution_with_no_source_reports_missing_input() {
    let err = resolve_list_text(None, None).expect_err("nothing to read");
    assert!(matches!(err, GenError::MissingInput));
    assert!(format!("{err}").contains("--from"));
}
