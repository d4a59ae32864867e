// CLASSIFICATION: COMMUNITY
// Filename: mod.rs v0.2
// Author: Lukas Bower
// Date Modified: 2026-08-17

//! Batch self-test harness.
//!
//! Runs a compiler binary over a manifest of test programs and compares
//! observed output against recorded expectations. Shares no data model with
//! the generators; the harness only knows processes and manifests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::error::GenError;

/// One test program and its expectations.
// TODO: carry expected_stderr and per-case compile options once the C side
// records them in its manifests.
#[derive(Debug, Deserialize)]
pub struct Case {
    pub name: String,
    /// Source file handed to the compiler.
    pub program: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub expected_stdout: Option<String>,
}

/// Manifest naming the compiler under test and its cases.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub compiler: PathBuf,
    pub cases: Vec<Case>,
}

impl Manifest {
    /// Loads a manifest, picking the parser by file extension: `.toml` is
    /// TOML, anything else JSON.
    pub fn load(path: &Path) -> Result<Self, GenError> {
        let data = fs::read_to_string(path)?;
        let manifest: Manifest = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
            toml::from_str(&data)?
        } else {
            serde_json::from_str(&data)?
        };
        Ok(manifest)
    }
}

/// Outcome of one case.
#[derive(Debug)]
pub enum Outcome {
    Pass { elapsed: Duration },
    Fail { reason: String },
}

/// Pass/fail tally across a manifest run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Runs one case to completion.
///
/// A compiler that cannot be spawned fails the case instead of aborting the
/// whole run. The stdout comparison ignores trailing newlines on both sides.
pub fn run_case(compiler: &Path, case: &Case) -> Outcome {
    let started = Instant::now();
    let output = match Command::new(compiler)
        .args(&case.args)
        .arg(&case.program)
        .output()
    {
        Ok(output) => output,
        Err(err) => {
            return Outcome::Fail {
                reason: format!("compiler not runnable: {err}"),
            }
        }
    };
    let elapsed = started.elapsed();

    if !output.status.success() {
        return Outcome::Fail {
            reason: format!("exit status {}", output.status),
        };
    }

    if let Some(expected) = &case.expected_stdout {
        let got = String::from_utf8_lossy(&output.stdout);
        if got.trim_end_matches('\n') != expected.trim_end_matches('\n') {
            return Outcome::Fail {
                reason: format!("stdout mismatch: expected {expected:?}, got {got:?}"),
            };
        }
    }

    Outcome::Pass { elapsed }
}

/// Runs every case, printing one line per case and a summary line.
pub fn run_all<W: std::io::Write>(manifest: &Manifest, out: &mut W) -> Result<Tally, GenError> {
    let mut tally = Tally::default();
    for case in &manifest.cases {
        match run_case(&manifest.compiler, case) {
            Outcome::Pass { elapsed } => {
                tally.passed += 1;
                writeln!(out, "PASS {} ({} ms)", case.name, elapsed.as_millis())?;
            }
            Outcome::Fail { reason } => {
                tally.failed += 1;
                writeln!(out, "FAIL {}: {}", case.name, reason)?;
            }
        }
    }
    writeln!(out, "{} passed, {} failed", tally.passed, tally.failed)?;
    Ok(tally)
}
