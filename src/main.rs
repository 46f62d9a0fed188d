use btc_monitor::cli::Cli;
use btc_monitor::config::Config;
use btc_monitor::notify::EmailNotifier;
use btc_monitor::pipeline::Pipeline;
use btc_monitor::source::CoinbaseSource;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    // Initialize file logging
    btc_monitor::telemetry::init_logging(&config.telemetry)?;

    tracing::info!("Starting BTC price monitor run");

    let source = CoinbaseSource::new(&config.source)?;
    let notifier = EmailNotifier::new(config.email.clone());

    let report = Pipeline::new(config, source, notifier).run().await;

    tracing::info!(
        "Run complete: {} samples collected",
        report.samples_collected
    );

    Ok(())
}
