// CLASSIFICATION: COMMUNITY
// Filename: logging.rs v0.1
// Date Modified: 2026-07-11
// Author: Lukas Bower

//! Append-only invocation log.
//!
//! Every binary entry point records what it was asked to do and how it
//! finished. Logging must never take the tool down: all I/O errors are
//! swallowed at the call site.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use once_cell::sync::Lazy;

/// Name of the log file inside [`LOG_DIR`].
pub const LOG_FILE: &str = "cohgen_invocations.log";

/// Directory receiving the invocation log. `COHGEN_LOG_DIR` overrides the
/// system temp directory.
pub static LOG_DIR: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var_os("COHGEN_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
});

fn append(line: &str) -> std::io::Result<()> {
    fs::create_dir_all(&*LOG_DIR)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_DIR.join(LOG_FILE))?;
    writeln!(file, "{} {}", Utc::now().to_rfc3339(), line)
}

/// Writes one invocation record. Failures are dropped silently.
pub fn log(level: &str, kind: &str, input: &str, msg: &str) {
    let _ = append(&format!("[{level}] kind={kind} input={input} {msg}"));
}

/// Records a fatal outcome before the process exits nonzero.
pub fn log_failure(msg: &str) {
    let _ = append(&format!("[ERROR] {msg}"));
}

/// Logs an informational invocation record.
#[macro_export]
macro_rules! cohgen_info {
    ($kind:expr, $input:expr, $($arg:tt)*) => {
        $crate::logging::log("INFO", $kind, $input, &format!($($arg)*))
    };
}

/// Logs a warning invocation record.
#[macro_export]
macro_rules! cohgen_warn {
    ($kind:expr, $input:expr, $($arg:tt)*) => {
        $crate::logging::log("WARN", $kind, $input, &format!($($arg)*))
    };
}

/// Logs an error invocation record.
#[macro_export]
macro_rules! cohgen_error {
    ($kind:expr, $input:expr, $($arg:tt)*) => {
        $crate::logging::log("ERROR", $kind, $input, &format!($($arg)*))
    };
}
