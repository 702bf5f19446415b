use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line surface of the batch runner.
#[derive(Parser, Debug)]
#[command(
    name = "lh-report",
    about = "Lighthouse audit CLI: JSON/HTML/PDF reports - Batch mode!",
    version,
)]
pub struct Cli {
    /// URL(s) to audit, or a single @urls.txt file reference
    pub inputs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: FormatArg,

    /// Pro license key for HTML/PDF output
    #[arg(short, long)]
    pub license: Option<String>,

    /// Output directory, created recursively if absent
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Comma-separated audit categories
    #[arg(long, default_value = "performance,accessibility,best-practices,seo")]
    pub categories: String,

    /// Previous score report JSON for trends comparison
    #[arg(long)]
    pub compare: Option<PathBuf>,
}

/// CLI-facing output format values
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Html,
    Pdf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, OutputFormat};

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["lh-report", "https://example.com"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(
            config.categories,
            vec!["performance", "accessibility", "best-practices", "seo"]
        );
        assert!(config.compare.is_none());
    }

    #[test]
    fn categories_are_split_and_trimmed() {
        let cli = Cli::parse_from([
            "lh-report",
            "https://example.com",
            "--categories",
            "performance, seo ,",
        ]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.categories, vec!["performance", "seo"]);
    }

    #[test]
    fn pro_format_and_license_parse() {
        let cli = Cli::parse_from([
            "lh-report",
            "https://example.com",
            "-f",
            "pdf",
            "-l",
            "DEMO-PRO",
            "-o",
            "reports",
        ]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.format, OutputFormat::Pdf);
        assert_eq!(config.license.as_deref(), Some("DEMO-PRO"));
        assert_eq!(config.output_dir, PathBuf::from("reports"));
    }
}
