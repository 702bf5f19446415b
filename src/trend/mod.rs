//! Trend comparison - delta enrichment against a previous run
//!
//! ## Responsibilities
//!
//! 1. **Load**: read and validate the previously persisted score report
//! 2. **Compute**: per-category deltas for categories both runs share
//! 3. **Render**: the HTML trend table spliced into rendered reports
//! 4. **Name**: the `-vs-<previous>` suffix that keeps repeated
//!    comparisons from overwriting each other

pub mod table;

pub use table::{render_trend_table, splice_before_body};

use crate::error::{AppError, AppResult, FileError};
use crate::models::{CategoryDelta, ScoreReport};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Longest slice of the previous file's basename carried into filenames
const COMPARE_SUFFIX_MAX: usize = 10;

/// Load and validate a previously persisted score report.
pub async fn load_previous_report(path: &Path) -> AppResult<ScoreReport> {
    if !path.exists() {
        return Err(AppError::File(FileError::NotFound {
            path: path.display().to_string(),
        }));
    }
    let raw = fs::read_to_string(path).await.map_err(|e| {
        AppError::File(FileError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    })?;
    ScoreReport::from_json(&raw).map_err(|e| AppError::invalid_report_file(path, e))
}

/// Compute per-category deltas between the current and a previous report.
///
/// Only categories present in both reports with a numeric score on both
/// sides are included; anything else is silently excluded, never zeroed.
pub fn compute_deltas(
    current: &ScoreReport,
    previous: &ScoreReport,
) -> BTreeMap<String, CategoryDelta> {
    let mut deltas = BTreeMap::new();
    for (id, category) in &current.categories {
        let Some(curr_score) = category.score else {
            debug!("category {} has no score in the current run, skipping", id);
            continue;
        };
        let Some(prev_score) = previous.category_score(id) else {
            debug!("category {} missing from the previous run, skipping", id);
            continue;
        };
        deltas.insert(
            id.clone(),
            CategoryDelta {
                current: curr_score,
                previous: prev_score,
                delta: curr_score - prev_score,
            },
        );
    }
    deltas
}

/// Filename suffix identifying the comparison source, e.g. `-vs-baseline-2`.
pub fn compare_suffix(previous: &Path) -> String {
    let name = previous
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(".json").unwrap_or(&name);
    let short: String = base.chars().take(COMPARE_SUFFIX_MAX).collect();
    format!("-vs-{}", short)
}
