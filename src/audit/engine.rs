//! Audit engine - infrastructure layer
//!
//! Holds the engine invocation details (executable, DevTools port, load
//! budget) and exposes the audit capability. Does not know about batches,
//! trends, or output files.

use crate::config::Config;
use crate::error::{AppError, AuditError};
use crate::models::ScoreReport;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Longest slice of engine stderr carried into error messages
const STDERR_TAIL: usize = 500;

/// External auditing engine reached through a child process.
///
/// The engine connects to the already-running shared browser over the
/// DevTools port instead of launching its own.
pub struct AuditEngine {
    binary: String,
    port: u16,
    max_wait_for_load_ms: u64,
}

/// What one audit yields: the validated score report, plus the rendered
/// HTML document when the requested output format needs one.
#[derive(Debug)]
pub struct AuditOutcome {
    pub report: ScoreReport,
    pub html: Option<String>,
}

impl AuditEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            binary: config.lighthouse_bin.clone(),
            port: config.browser_debug_port,
            max_wait_for_load_ms: config.max_wait_for_load_ms,
        }
    }

    /// Audit a single URL for the given categories.
    pub async fn audit(
        &self,
        url: &str,
        categories: &[String],
        want_html: bool,
    ) -> Result<AuditOutcome> {
        let scratch = tempfile::tempdir().context("creating engine scratch dir")?;

        let mut cmd = Command::new(&self.binary);
        cmd.arg(url)
            .arg("--port")
            .arg(self.port.to_string())
            .arg("--quiet")
            .arg("--no-enable-error-reporting")
            .arg(format!("--max-wait-for-load={}", self.max_wait_for_load_ms));
        if !categories.is_empty() {
            cmd.arg(format!("--only-categories={}", categories.join(",")));
        }

        // With a single output the engine writes the given path verbatim;
        // with several it appends `.report.<ext>` to the base.
        let json_path: PathBuf = scratch.path().join("audit.report.json");
        if want_html {
            cmd.args(["--output", "json", "--output", "html"]);
            cmd.arg("--output-path").arg(scratch.path().join("audit"));
        } else {
            cmd.args(["--output", "json"]);
            cmd.arg("--output-path").arg(&json_path);
        }

        debug!("running {} against {}", self.binary, url);
        let output = cmd
            .output()
            .await
            .map_err(|e| AppError::audit_spawn_failed(&self.binary, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Audit(AuditError::EngineFailed {
                url: url.to_string(),
                stderr: stderr_tail(&stderr),
            })
            .into());
        }
        if !json_path.exists() {
            return Err(AppError::Audit(AuditError::ReportMissing {
                path: json_path.display().to_string(),
            })
            .into());
        }

        let raw = tokio::fs::read_to_string(&json_path)
            .await
            .with_context(|| format!("reading engine report {}", json_path.display()))?;
        let report =
            ScoreReport::from_json(&raw).map_err(|e| AppError::report_parse_failed(url, e))?;
        debug!(
            "engine scored {} categor(ies) for {}",
            report.categories.len(),
            url
        );

        let html = if want_html {
            let html_path = scratch.path().join("audit.report.html");
            Some(
                tokio::fs::read_to_string(&html_path)
                    .await
                    .with_context(|| {
                        format!("reading rendered report {}", html_path.display())
                    })?,
            )
        } else {
            None
        };

        Ok(AuditOutcome { report, html })
    }
}

fn stderr_tail(stderr: &str) -> String {
    let trimmed = stderr.trim();
    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() > STDERR_TAIL {
        chars[chars.len() - STDERR_TAIL..].iter().collect()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_tail_keeps_short_output_whole() {
        assert_eq!(stderr_tail("  boom  "), "boom");
    }

    #[test]
    fn stderr_tail_keeps_the_end_of_long_output() {
        let long = format!("{}LAST", "x".repeat(600));
        let tail = stderr_tail(&long);
        assert_eq!(tail.chars().count(), STDERR_TAIL);
        assert!(tail.ends_with("LAST"));
    }
}
