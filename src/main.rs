// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.2
// Date Modified: 2026-08-12
// Author: Lukas Bower

//! Entry point for the cohgen binary.

use clap::Parser;

use cohgen::config::{resolve_list_text, Cli, Command};
use cohgen::{cohgen_info, dispatch, logging, prompt, Request};

fn main_entry() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.trace {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let (request, source) = match cli.command {
        Command::Enum { variants, from } => {
            let source = describe_source(variants.is_some(), from.as_deref());
            let variants = resolve_list_text(variants, from)?;
            (Request::Enum { variants }, source)
        }
        Command::Struct { name, fields, from } => {
            let source = describe_source(fields.is_some(), from.as_deref());
            let fields = resolve_list_text(fields, from)?;
            (Request::Struct { name, fields }, source)
        }
        Command::Prompt => {
            let stdin = std::io::stdin();
            let mut stderr = std::io::stderr();
            let request = prompt::run_session(&mut stdin.lock(), &mut stderr)?;
            (request, "prompt".to_string())
        }
    };

    let body = dispatch(&request)?;
    cohgen_info!(request.kind().label(), &source, "generated {} byte(s)", body.len());
    println!("{body}");
    Ok(())
}

fn describe_source(inline: bool, from: Option<&std::path::Path>) -> String {
    if inline {
        "inline".to_string()
    } else if let Some(path) = from {
        path.display().to_string()
    } else {
        "none".to_string()
    }
}

fn main() {
    if let Err(err) = main_entry() {
        logging::log_failure(&format!("{err}"));
        eprintln!("cohgen: {err}");
        std::process::exit(1);
    }
}
