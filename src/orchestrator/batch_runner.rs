//! Batch runner - orchestration layer
//!
//! ## Responsibilities
//!
//! 1. **Initialization**: output directory, shared audit browser, engine
//! 2. **Sequential batch**: one URL at a time, in input order
//! 3. **Failure isolation**: a failed URL is logged and skipped, never fatal
//! 4. **Resource ownership**: sole owner of the shared browser; releases it
//!    after the loop on every path
//! 5. **Run stats**: success/failure totals printed at the end

use crate::audit::AuditEngine;
use crate::browser::{self, SharedBrowser};
use crate::config::Config;
use crate::orchestrator::url_processor;
use crate::output;
use crate::utils::logging;
use anyhow::Result;
use tracing::{error, warn};

/// Application main structure.
pub struct App {
    config: Config,
    urls: Vec<String>,
    browser: SharedBrowser,
    engine: AuditEngine,
}

/// Batch outcome totals.
#[derive(Debug, Default)]
pub struct RunStats {
    pub success: usize,
    pub failed: usize,
    pub total: usize,
}

impl App {
    /// Acquire the run-wide resources. Any failure here is fatal pre-flight:
    /// nothing has been audited yet.
    pub async fn initialize(config: Config, urls: Vec<String>) -> Result<Self> {
        logging::log_startup(&config, urls.len());

        output::prepare_output_dir(&config.output_dir)?;
        let browser = browser::launch_audit_browser(config.browser_debug_port).await?;
        let engine = AuditEngine::new(&config);

        Ok(Self {
            config,
            urls,
            browser,
            engine,
        })
    }

    /// Run the batch. The shared browser is torn down when the loop is
    /// done, whatever happened inside it.
    pub async fn run(self) -> Result<RunStats> {
        let App {
            config,
            urls,
            browser,
            engine,
        } = self;

        let result = process_all_urls(&config, &urls, &engine).await;
        browser.shutdown().await;
        result
    }
}

async fn process_all_urls(
    config: &Config,
    urls: &[String],
    engine: &AuditEngine,
) -> Result<RunStats> {
    if config.compare.is_some() && urls.len() > 1 {
        warn!("⚠️ compare mode in a batch uses the same previous file for every URL");
    }

    let mut stats = RunStats {
        total: urls.len(),
        ..Default::default()
    };

    for (index, url) in urls.iter().enumerate() {
        logging::log_url_start(index + 1, urls.len(), url);
        match url_processor::process_url(engine, url, config).await {
            Ok(()) => stats.success += 1,
            Err(e) => {
                error!("❌ {}: {:#}", url, e);
                stats.failed += 1;
            }
        }
    }

    logging::print_final_stats(&stats);
    Ok(stats)
}
