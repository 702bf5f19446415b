use crate::cli::{Cli, FormatArg};
use crate::error::{AppError, AppResult, ConfigError};
use std::path::PathBuf;

/// Demo license key accepted for pro formats
const DEMO_LICENSE: &str = "DEMO-PRO";
/// Real license keys start with this prefix
const LICENSE_PREFIX: &str = "pro-";
/// Real license keys must be longer than this
const LICENSE_MIN_LEN: usize = 10;

/// Requested output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
    Pdf,
}

impl OutputFormat {
    /// File extension for the emitted report
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Pro formats are gated behind the license check
    pub fn is_pro(&self) -> bool {
        matches!(self, OutputFormat::Html | OutputFormat::Pdf)
    }

    /// Whether this format needs the engine's rendered HTML report
    pub fn wants_rendered_report(&self) -> bool {
        self.is_pro()
    }
}

/// Runtime configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Requested output format
    pub format: OutputFormat,
    /// Pro license key, if given
    pub license: Option<String>,
    /// Directory reports are written into
    pub output_dir: PathBuf,
    /// Audit categories passed to the engine
    pub categories: Vec<String>,
    /// Previous score report JSON for trend comparison
    pub compare: Option<PathBuf>,
    /// DevTools port the shared browser listens on
    pub browser_debug_port: u16,
    /// Audit engine executable
    pub lighthouse_bin: String,
    /// Page-load budget handed to the engine, in milliseconds
    pub max_wait_for_load_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            license: None,
            output_dir: PathBuf::from("."),
            categories: vec![
                "performance".to_string(),
                "accessibility".to_string(),
                "best-practices".to_string(),
                "seo".to_string(),
            ],
            compare: None,
            browser_debug_port: 9222,
            lighthouse_bin: "lighthouse".to_string(),
            max_wait_for_load_ms: 120_000,
        }
    }
}

impl Config {
    /// Build the runtime configuration from parsed CLI arguments, with
    /// environment overrides for the engine-facing knobs.
    pub fn from_cli(cli: &Cli) -> Self {
        let default = Self::default();
        Self {
            format: match cli.format {
                FormatArg::Json => OutputFormat::Json,
                FormatArg::Html => OutputFormat::Html,
                FormatArg::Pdf => OutputFormat::Pdf,
            },
            license: cli.license.clone(),
            output_dir: cli.output.clone(),
            categories: cli
                .categories
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect(),
            compare: cli.compare.clone(),
            browser_debug_port: std::env::var("LH_BROWSER_DEBUG_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.browser_debug_port),
            lighthouse_bin: std::env::var("LH_LIGHTHOUSE_BIN")
                .unwrap_or(default.lighthouse_bin),
            max_wait_for_load_ms: default.max_wait_for_load_ms,
        }
    }

    /// Fail-fast license gate: pro formats need a valid key before any
    /// browser is launched or audit started.
    pub fn ensure_license(&self) -> AppResult<()> {
        if self.format.is_pro() && !is_valid_license(self.license.as_deref()) {
            return Err(AppError::Config(ConfigError::LicenseRequired {
                format: self.format.extension().to_string(),
            }));
        }
        Ok(())
    }
}

/// A key is valid when it is the demo token, or carries the `pro-` prefix
/// and is longer than 10 characters.
pub fn is_valid_license(key: Option<&str>) -> bool {
    match key {
        Some(DEMO_LICENSE) => true,
        Some(key) => key.starts_with(LICENSE_PREFIX) && key.len() > LICENSE_MIN_LEN,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_key_is_accepted() {
        assert!(is_valid_license(Some("DEMO-PRO")));
    }

    #[test]
    fn prefixed_key_must_exceed_minimum_length() {
        assert!(is_valid_license(Some("pro-abcdefghij")));
        assert!(!is_valid_license(Some("pro-short")));
        // exactly 10 characters is still too short
        assert!(!is_valid_license(Some("pro-123456")));
    }

    #[test]
    fn wrong_prefix_or_missing_key_is_rejected() {
        assert!(!is_valid_license(Some("trial-abcdefghij")));
        assert!(!is_valid_license(None));
    }

    #[test]
    fn pro_format_without_license_fails_fast() {
        let config = Config {
            format: OutputFormat::Html,
            ..Config::default()
        };
        assert!(config.ensure_license().is_err());
    }

    #[test]
    fn json_format_needs_no_license() {
        let config = Config::default();
        assert!(config.ensure_license().is_ok());
    }

    #[test]
    fn pdf_with_demo_license_passes() {
        let config = Config {
            format: OutputFormat::Pdf,
            license: Some("DEMO-PRO".to_string()),
            ..Config::default()
        };
        assert!(config.ensure_license().is_ok());
    }
}
