//! Log helpers
//!
//! Banner and stats formatting for the run lifecycle.

use crate::config::Config;
use crate::orchestrator::RunStats;
use tracing::info;

/// Startup banner.
pub fn log_startup(config: &Config, url_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 lh-report - batch audit mode");
    info!(
        "📊 {} URL(s), format: {}",
        url_count,
        config.format.extension()
    );
    info!("📂 output directory: {}", config.output_dir.display());
    if let Some(previous) = &config.compare {
        info!("📈 comparing against: {}", previous.display());
    }
    info!("{}", "=".repeat(60));
}

/// Per-URL header line.
pub fn log_url_start(index: usize, total: usize, url: &str) {
    info!("\n{}", "─".repeat(60));
    info!("⚡ [{}/{}] Auditing {}...", index, total, url);
}

/// Final success/failure block.
pub fn print_final_stats(stats: &RunStats) {
    info!("\n{}", "=".repeat(60));
    info!("📊 batch complete");
    info!(
        "finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ succeeded: {}/{}", stats.success, stats.total);
    info!("❌ failed: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
