//! Input resolution - turns CLI positionals into the list of URLs to audit
//!
//! A single `@<path>` entry is expanded to the newline-delimited contents of
//! that file. Any other shape is taken literally, even if one of several
//! entries happens to start with `@`.

use crate::error::{AppError, AppResult, InputError};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Resolve the positional inputs into an ordered URL list.
///
/// Fails with [`InputError::NoUrls`] when nothing is left after resolution.
pub async fn resolve_url_inputs(inputs: &[String]) -> AppResult<Vec<String>> {
    let urls = match inputs {
        [single] if single.starts_with('@') => {
            let path = Path::new(&single[1..]);
            info!("📁 reading URL list from {}", path.display());
            load_url_file(path).await?
        }
        other => other.to_vec(),
    };

    if urls.is_empty() {
        return Err(AppError::Input(InputError::NoUrls));
    }

    info!("✓ resolved {} URL(s)", urls.len());
    Ok(urls)
}

/// Load a URL-per-line file, trimming whitespace and dropping blank lines.
pub async fn load_url_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).await.map_err(|e| {
        AppError::Input(InputError::UrlFileUnreadable {
            path: path.display().to_string(),
            source: Box::new(e),
        })
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn url_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn expands_a_single_file_reference() {
        let file = url_file("https://a.com\n\nhttps://b.com\n");
        let input = vec![format!("@{}", file.path().display())];
        let urls = tokio_test::block_on(resolve_url_inputs(&input)).unwrap();
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn trims_windows_line_endings() {
        let file = url_file("https://a.com\r\n  https://b.com  \r\n");
        let input = vec![format!("@{}", file.path().display())];
        let urls = tokio_test::block_on(resolve_url_inputs(&input)).unwrap();
        assert_eq!(urls, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn literal_urls_pass_through_in_order() {
        let input = vec!["https://b.com".to_string(), "https://a.com".to_string()];
        let urls = tokio_test::block_on(resolve_url_inputs(&input)).unwrap();
        assert_eq!(urls, vec!["https://b.com", "https://a.com"]);
    }

    #[test]
    fn file_reference_mixed_with_literals_is_not_expanded() {
        let file = url_file("https://c.com\n");
        let input = vec![
            format!("@{}", file.path().display()),
            "https://d.com".to_string(),
        ];
        let urls = tokio_test::block_on(resolve_url_inputs(&input)).unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].starts_with('@'));
        assert_eq!(urls[1], "https://d.com");
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = tokio_test::block_on(resolve_url_inputs(&[])).unwrap_err();
        assert!(matches!(
            err,
            AppError::Input(InputError::NoUrls)
        ));
    }

    #[test]
    fn blank_file_is_an_error() {
        let file = url_file("\n  \n");
        let input = vec![format!("@{}", file.path().display())];
        let err = tokio_test::block_on(resolve_url_inputs(&input)).unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::NoUrls)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let input = vec!["@/no/such/list.txt".to_string()];
        let err = tokio_test::block_on(resolve_url_inputs(&input)).unwrap_err();
        assert!(matches!(
            err,
            AppError::Input(InputError::UrlFileUnreadable { .. })
        ));
    }
}
