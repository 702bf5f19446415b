//! URL to filename sanitization
//!
//! Every character outside `[a-zA-Z0-9]` becomes a hyphen, runs collapse to
//! one, and the result is truncated to 50 characters before the `-lh` suffix
//! and extension. Two URLs sharing a 50-character sanitized prefix therefore
//! collide and overwrite each other - accepted behavior, kept as-is.

use anyhow::Result;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Sanitized prefixes never exceed this many characters
const MAX_STEM_LEN: usize = 50;

/// Sanitize a URL into a filesystem-safe name stem.
pub fn sanitize_url(url: &str) -> Result<String> {
    let non_alnum = Regex::new("[^a-zA-Z0-9]")?;
    let hyphen_runs = Regex::new("-+")?;

    let replaced = non_alnum.replace_all(url, "-");
    let collapsed = hyphen_runs.replace_all(&replaced, "-");
    Ok(collapsed.chars().take(MAX_STEM_LEN).collect())
}

/// Final file name: `<sanitized>-lh[<compare suffix>].<ext>`.
pub fn report_file_name(url: &str, compare_suffix: &str, extension: &str) -> Result<String> {
    Ok(format!(
        "{}-lh{}.{}",
        sanitize_url(url)?,
        compare_suffix,
        extension
    ))
}

/// Full output path inside the configured directory.
pub fn output_path(
    dir: &Path,
    url: &str,
    compare_suffix: &str,
    extension: &str,
) -> Result<PathBuf> {
    Ok(dir.join(report_file_name(url, compare_suffix, extension)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_names_are_hyphenated_alnum() {
        let stem = sanitize_url("https://Ex-ample.com/page?q=1").unwrap();
        assert_eq!(stem, "https-Ex-ample-com-page-q-1");
        assert!(Regex::new("^[a-zA-Z0-9-]+$").unwrap().is_match(&stem));
        assert!(!stem.contains("--"));
    }

    #[test]
    fn stems_truncate_at_fifty_characters() {
        let url = format!("https://example.com/{}", "a".repeat(80));
        let stem = sanitize_url(&url).unwrap();
        assert_eq!(stem.len(), 50);
    }

    #[test]
    fn urls_sharing_a_long_prefix_collide() {
        // Accepted limitation: the second output overwrites the first.
        let a = format!("https://example.com/{}/x", "a".repeat(60));
        let b = format!("https://example.com/{}/y", "a".repeat(60));
        assert_eq!(
            report_file_name(&a, "", "json").unwrap(),
            report_file_name(&b, "", "json").unwrap()
        );
    }

    #[test]
    fn suffix_and_extension_are_appended() {
        let name = report_file_name("https://a.com", "-vs-baseline", "html").unwrap();
        assert_eq!(name, "https-a-com-lh-vs-baseline.html");
    }

    #[test]
    fn paths_land_in_the_output_directory() {
        let path = output_path(Path::new("reports"), "https://a.com", "", "pdf").unwrap();
        assert_eq!(path, PathBuf::from("reports/https-a-com-lh.pdf"));
    }
}
