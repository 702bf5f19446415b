//! Shared audit browser - process-wide resource for the batch loop
//!
//! One instrumented Chromium instance serves every audit in the run. It is
//! launched before the batch loop, must answer on a fixed DevTools port so
//! the external engine can reach it, and is torn down after the loop even
//! when individual audits fail.

use crate::error::{AppError, AppResult, BrowserError};
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tracing::{debug, error, info};

/// Flag set handed to the shared instance; the debugging port is appended.
const AUDIT_BROWSER_FLAGS: &[&str] = &[
    "--disable-gpu",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-extensions",
    "--disable-background-timer-throttling",
    "--disable-backgrounding-occluded-windows",
    "--disable-renderer-backgrounding",
];

/// Handle to the browser shared across all URLs in a run.
pub struct SharedBrowser {
    browser: Browser,
    handler_task: JoinHandle<()>,
    port: u16,
}

impl SharedBrowser {
    /// DevTools port the instance listens on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Tear the instance down. Failures are logged, not propagated - there
    /// is nothing left to do with a browser that will not close.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            error!("failed to close shared browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            error!("failed to reap shared browser: {}", e);
        }
        let _ = self.handler_task.await;
        debug!("shared browser shut down");
    }
}

/// Launch the shared headless instance on the given DevTools port.
pub async fn launch_audit_browser(port: u16) -> AppResult<SharedBrowser> {
    info!("🚀 launching shared audit browser...");

    let mut args: Vec<String> = AUDIT_BROWSER_FLAGS.iter().map(|f| f.to_string()).collect();
    args.push(format!("--remote-debugging-port={}", port));

    let config = BrowserConfig::builder()
        .new_headless_mode()
        .args(args)
        .build()
        .map_err(|message| {
            AppError::Browser(BrowserError::ConfigurationFailed { message })
        })?;

    let (browser, mut handler) = Browser::launch(config)
        .await
        .map_err(AppError::browser_launch_failed)?;
    debug!("browser process started");

    // Drain browser events in the background
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // Brief pause so the browser state settles before the first audit
    sleep(Duration::from_millis(300)).await;

    probe_debugger(port).await?;
    info!("Chrome debugging on {}", port);

    Ok(SharedBrowser {
        browser,
        handler_task,
        port,
    })
}

/// Confirm the DevTools endpoint answers before the batch starts.
async fn probe_debugger(port: u16) -> AppResult<()> {
    let endpoint = format!("http://127.0.0.1:{}/json/version", port);
    let response = reqwest::get(&endpoint)
        .await
        .map_err(|e| AppError::debugger_unreachable(port, e))?;
    let version: serde_json::Value = response
        .json()
        .await
        .map_err(|e| AppError::debugger_unreachable(port, e))?;

    debug!(
        "DevTools endpoint ready: {}",
        version
            .get("Browser")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
    );
    Ok(())
}
