//! Runtime configuration from the environment (and an optional `.env` file).
//!
//! | variable               | default | meaning                                   |
//! |------------------------|---------|-------------------------------------------|
//! | `BAYES_LOG`            | `warn`  | tracing filter directive                  |
//! | `BAYES_LOG_FILE`       | unset   | log file (the TUI only logs when set)     |
//! | `BAYES_CANVAS_WIDTH`   | `600`   | layout canvas width (pixels)              |
//! | `BAYES_CANVAS_HEIGHT`  | `600`   | layout canvas height (pixels)             |
//! | `BAYES_EXPORT_DIR`     | `.`     | directory for SVG exports from the TUI    |

use std::path::PathBuf;

use crate::domain::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::error::AppError;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_filter: String,
    pub log_file: Option<PathBuf>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub export_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (unset keys return `None`).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = non_empty(lookup("BAYES_LOG")) {
            config.log_filter = filter;
        }
        config.log_file = non_empty(lookup("BAYES_LOG_FILE")).map(PathBuf::from);
        if let Some(dir) = non_empty(lookup("BAYES_EXPORT_DIR")) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(raw) = non_empty(lookup("BAYES_CANVAS_WIDTH")) {
            config.canvas_width = parse_dimension("BAYES_CANVAS_WIDTH", &raw)?;
        }
        if let Some(raw) = non_empty(lookup("BAYES_CANVAS_HEIGHT")) {
            config.canvas_height = parse_dimension("BAYES_CANVAS_HEIGHT", &raw)?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_dimension(key: &str, raw: &str) -> Result<u32, AppError> {
    match raw.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(AppError::new(
            2,
            format!("{key} must be a positive integer (got '{raw}')."),
        )),
    }
}
