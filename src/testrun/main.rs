// CLASSIFICATION: COMMUNITY
// Filename: main.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-08-17

//! Entry point for the cohgen_testrun binary.

use std::path::PathBuf;

use clap::Parser;

use cohgen::cohgen_info;
use cohgen::testrun::{run_all, Manifest};

#[derive(Parser)]
struct Args {
    /// Manifest of test cases, TOML or JSON.
    #[clap(long)]
    manifest: PathBuf,
    /// Override the compiler path recorded in the manifest.
    #[clap(long)]
    compiler: Option<PathBuf>,
}

fn main_entry() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::init();

    let mut manifest = Manifest::load(&args.manifest)?;
    if let Some(compiler) = args.compiler {
        manifest.compiler = compiler;
    }

    let mut stdout = std::io::stdout();
    let tally = run_all(&manifest, &mut stdout)?;
    cohgen_info!(
        "testrun",
        &args.manifest.display().to_string(),
        "{} passed, {} failed of {}",
        tally.passed,
        tally.failed,
        tally.total()
    );
    if tally.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn main() {
    if let Err(err) = main_entry() {
        cohgen::logging::log_failure(&format!("{err}"));
        eprintln!("cohgen_testrun: {err}");
        std::process::exit(1);
    }
}
