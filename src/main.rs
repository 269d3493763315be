use clap::Parser;
use storefront::utils::{logger, validation::Validate};
use storefront::view::notice;
use storefront::{shell, BrowseSession, CliConfig, HttpProductSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting storefront CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = HttpProductSource::new(config.api_endpoint.clone());
    let mut session = BrowseSession::new(config);

    // Fire-once catalogue fetch. A failure is announced once; browsing
    // continues with the error flag set and no retry.
    if let Err(e) = session.load(&source).await {
        notice::blocking_error("Error", &format!("Network error: {}", e));
    }

    shell::run(&mut session)?;

    tracing::info!("Storefront session ended");
    Ok(())
}
