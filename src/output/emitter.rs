//! Report file emission
//!
//! One writer per format. Writers log the emitted path; the caller decides
//! which one runs for a given URL.

use crate::error::{AppError, AppResult, ConfigError, FileError};
use crate::models::ScoreReport;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Create the output directory (and parents) up front.
pub fn prepare_output_dir(dir: &Path) -> AppResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::Config(ConfigError::OutputDirFailed {
            path: dir.display().to_string(),
            source: Box::new(e),
        })
    })
}

/// Serialize the (possibly delta-enriched) report as pretty-printed JSON.
pub async fn write_json_report(path: &Path, report: &ScoreReport) -> AppResult<()> {
    let json = report
        .to_pretty_json()
        .map_err(|e| AppError::invalid_report_file(path, e))?;
    write_bytes(path, json.as_bytes()).await?;
    info!("✅ JSON report: {}", path.display());
    Ok(())
}

/// Write the rendered (possibly delta-augmented) HTML document verbatim.
pub async fn write_html_report(path: &Path, html: &str) -> AppResult<()> {
    write_bytes(path, html.as_bytes()).await?;
    info!("✅ HTML report: {}", path.display());
    Ok(())
}

/// Write the printed PDF bytes.
pub async fn write_pdf_report(path: &Path, pdf: &[u8]) -> AppResult<()> {
    write_bytes(path, pdf).await?;
    info!("✅ PDF report: {}", path.display());
    Ok(())
}

async fn write_bytes(path: &Path, bytes: &[u8]) -> AppResult<()> {
    fs::write(path, bytes).await.map_err(|e| {
        AppError::File(FileError::WriteFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    })
}
