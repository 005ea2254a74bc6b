//! Export a computation as JSON.
//!
//! The schema is `report::ResultSummary`: inputs, derived values and diagram
//! geometry, easy to consume from scripts or notebooks.

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::domain::{BayesResult, DiagramLayout};
use crate::error::AppError;
use crate::report::summary;

/// Write a result JSON file.
pub fn write_result_json(path: &Path, result: &BayesResult, layout: &DiagramLayout) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(4, format!("Failed to create result JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &summary(result, layout))
        .map_err(|e| AppError::new(4, format!("Failed to write result JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote result JSON");
    Ok(())
}

/// Render a result summary as a pretty JSON string (for stdout).
pub fn result_json_string(result: &BayesResult, layout: &DiagramLayout) -> Result<String, AppError> {
    serde_json::to_string_pretty(&summary(result, layout))
        .map_err(|e| AppError::new(4, format!("Failed to serialize result JSON: {e}")))
}

/// `dir/bayes_<YYYYmmdd_HHMMSS>.<ext>` using local time.
pub fn timestamped_path(dir: &Path, ext: &str) -> PathBuf {
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("bayes_{ts}.{ext}"))
}
