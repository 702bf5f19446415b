//! PDF conversion - prints a rendered report in a short-lived browser
//!
//! Each conversion launches its own headless instance, independent of the
//! shared audit browser, and tears it down when the bytes are out. The
//! document gets a print stylesheet injected into its head, is loaded from
//! a scratch file, and is printed as A4 with backgrounds on.

use crate::error::{AppError, BrowserError};
use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::time::{sleep, Duration};
use tracing::debug;

/// Stylesheet spliced into the report's head for print
const PRINT_CSS: &str = r#"
<style>
  body { font-family: -apple-system, sans-serif; margin: 0; }
  .lh-container { max-width: 100%; }
  .lh-metric { border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
  .lh-metric--pass { border-left: 4px solid #28a745; }
  .lh-metric--average { border-left: 4px solid #ffc107; }
  .lh-metric--fail { border-left: 4px solid #dc3545; }
</style>"#;

/// A4 paper, inches
const A4_WIDTH_IN: f64 = 8.27;
const A4_HEIGHT_IN: f64 = 11.69;
/// 10mm, inches
const MARGIN_IN: f64 = 0.39;

/// Grace period after load for late subresource fetches
const NETWORK_IDLE_GRACE: Duration = Duration::from_millis(500);

/// Print an HTML report document to PDF bytes.
pub async fn render_report_pdf(report_html: &str) -> Result<Vec<u8>> {
    let document = inject_print_css(report_html);

    let config = BrowserConfig::builder()
        .new_headless_mode()
        .args(vec!["--no-sandbox", "--remote-debugging-port=0"])
        .build()
        .map_err(|message| {
            AppError::Browser(BrowserError::ConfigurationFailed { message })
        })?;

    let (mut browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        AppError::Browser(BrowserError::PdfRenderFailed {
            source: Box::new(e),
        })
    })?;
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });
    sleep(Duration::from_millis(300)).await;

    // Print first, then tear the browser down no matter how printing went.
    let result = print_document(&browser, &document).await;

    if let Err(e) = browser.close().await {
        debug!("pdf browser close failed: {}", e);
    }
    if let Err(e) = browser.wait().await {
        debug!("pdf browser reap failed: {}", e);
    }
    let _ = handler_task.await;

    result
}

async fn print_document(browser: &Browser, document: &str) -> Result<Vec<u8>> {
    let scratch = tempfile::tempdir().context("creating scratch dir for PDF input")?;
    let doc_path = scratch.path().join("report.html");
    tokio::fs::write(&doc_path, document)
        .await
        .context("writing PDF input document")?;

    let page = browser
        .new_page(format!("file://{}", doc_path.display()))
        .await
        .context("loading report document")?;
    page.wait_for_navigation()
        .await
        .context("waiting for report document to load")?;
    sleep(NETWORK_IDLE_GRACE).await;

    let params = PrintToPdfParams {
        print_background: Some(true),
        paper_width: Some(A4_WIDTH_IN),
        paper_height: Some(A4_HEIGHT_IN),
        margin_top: Some(MARGIN_IN),
        margin_bottom: Some(MARGIN_IN),
        ..Default::default()
    };
    let bytes = page.pdf(params).await.context("printing report to PDF")?;
    debug!("printed {} bytes of PDF", bytes.len());
    Ok(bytes)
}

/// Splice the print stylesheet before the first closing head tag.
/// Documents without a head section pass through unchanged.
pub fn inject_print_css(html: &str) -> String {
    html.replacen("</head>", &format!("{}</head>", PRINT_CSS), 1)
}
