use anyhow::Result;
use clap::Parser;
use lh_report::cli::Cli;
use lh_report::config::Config;
use lh_report::logger;
use lh_report::models::resolve_url_inputs;
use lh_report::orchestrator::App;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging first
    logger::init();

    // Parse arguments and build the runtime configuration
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    // Pre-flight: URLs and license, before any browser is launched
    let urls = resolve_url_inputs(&cli.inputs).await?;
    config.ensure_license()?;

    // Initialize and run the batch
    let _stats = App::initialize(config, urls).await?.run().await?;

    Ok(())
}
