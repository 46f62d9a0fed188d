//! CLI interface for btc-monitor
//!
//! A single invocation performs one full run: sample for an hour,
//! persist, render the chart, and send the summary email.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "btc-monitor")]
#[command(about = "Hourly BTC spot price sampler and email reporter")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}
