//! Structured logging setup.
//!
//! stdout is reserved for command output (reports, JSON). `bayes calc` logs to
//! stderr; the TUI owns the terminal, so it logs only to `BAYES_LOG_FILE`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::AppError;

/// Where log output goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// stderr, plus the log file when one is configured.
    Stderr,
    /// Log file only; no logging at all when none is configured.
    FileOnly,
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(config: &AppConfig, target: LogTarget) -> Result<(), AppError> {
    let filter = build_filter(&config.log_filter)?;

    match (&config.log_file, target) {
        (Some(path), _) => {
            let file = open_log_file(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, LogTarget::Stderr) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, LogTarget::FileOnly) => {}
    }

    Ok(())
}

fn build_filter(directive: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directive)
        .map_err(|e| AppError::new(2, format!("Invalid BAYES_LOG filter '{directive}': {e}")))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, AppError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open log file '{}': {e}", path.display())))
}
