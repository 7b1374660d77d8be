//! Tracing subscriber setup
//!
//! CLI commands log to stderr. The TUI owns the terminal, so it logs to
//! `loan-report.log` under the base directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "loan_report=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Initialize the global subscriber writing to stderr
pub fn init_stderr() {
    TRACING_INIT.call_once(|| {
        fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

/// Initialize the global subscriber appending to a log file
///
/// Falls back to discarding output if the file cannot be opened; the TUI
/// must never write diagnostics over the alternate screen.
pub fn init_file(path: &Path) {
    TRACING_INIT.call_once(|| {
        let file = OpenOptions::new().create(true).append(true).open(path);
        match file {
            Ok(file) => {
                fmt()
                    .with_env_filter(env_filter())
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .init();
            }
            Err(_) => {
                fmt()
                    .with_env_filter(env_filter())
                    .with_writer(std::io::sink)
                    .init();
            }
        }
    });
}
