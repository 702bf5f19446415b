//! Single URL processor - orchestration layer
//!
//! Runs the four pipeline stages for one URL: audit, optional trend
//! enrichment, and emission in the requested format. Errors bubble to the
//! batch runner, which logs them and moves on; a broken comparison file is
//! handled here so the base report still gets written.

use crate::audit::AuditEngine;
use crate::browser;
use crate::config::{Config, OutputFormat};
use crate::output;
use crate::trend;
use anyhow::{Context, Result};
use tracing::{error, info};

/// Audit one URL and write its report.
pub async fn process_url(engine: &AuditEngine, url: &str, config: &Config) -> Result<()> {
    let want_html = config.format.wants_rendered_report();
    let outcome = engine.audit(url, &config.categories, want_html).await?;

    let mut report = outcome.report;
    let mut rendered = outcome.html;
    let mut compare_suffix = String::new();

    if let Some(previous_path) = &config.compare {
        match trend::load_previous_report(previous_path).await {
            Ok(previous) => {
                let deltas = trend::compute_deltas(&report, &previous);
                compare_suffix = trend::compare_suffix(previous_path);
                info!("📈 {} categor(ies) in trend comparison", deltas.len());

                if config.format != OutputFormat::Json {
                    if let Some(html) = rendered.take() {
                        let table = trend::render_trend_table(&deltas)?;
                        rendered = Some(trend::splice_before_body(&html, &table)?);
                    }
                }
                report.deltas = Some(deltas);
            }
            // Enrichment is best-effort: keep the base report.
            Err(e) => error!("[{}] skipping trends, previous report unusable: {}", url, e),
        }
    }

    let path = output::output_path(
        &config.output_dir,
        url,
        &compare_suffix,
        config.format.extension(),
    )?;

    match config.format {
        OutputFormat::Json => output::write_json_report(&path, &report).await?,
        OutputFormat::Html => {
            let html = rendered.context("engine returned no rendered report")?;
            output::write_html_report(&path, &html).await?;
        }
        OutputFormat::Pdf => {
            let html = rendered.context("engine returned no rendered report")?;
            info!("🖨️  rendering PDF...");
            let bytes = browser::render_report_pdf(&html).await?;
            output::write_pdf_report(&path, &bytes).await?;
        }
    }

    Ok(())
}
