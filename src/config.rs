//! Configuration types for btc-monitor

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub sampler: SamplerConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    pub email: EmailConfig,
    pub telemetry: TelemetryConfig,
}

/// Quote endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Spot price endpoint URL
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl SourceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Sampling loop configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SamplerConfig {
    /// Number of samples per run
    #[serde(default = "default_sample_count")]
    pub sample_count: u32,

    /// Delay between samples (seconds)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_sample_count() -> u32 {
    60
}
fn default_interval_secs() -> u64 {
    60
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_count: 60,
            interval_secs: 60,
        }
    }
}

/// Data file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON price log, overwritten each run
    pub data_file: PathBuf,
}

/// Chart output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    /// Path of the rendered PNG, overwritten each run
    #[serde(default = "default_chart_file")]
    pub output_file: PathBuf,

    /// Canvas width in pixels
    #[serde(default = "default_chart_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_chart_height")]
    pub height: u32,
}

fn default_chart_file() -> PathBuf {
    PathBuf::from("BTC_graph.png")
}
fn default_chart_width() -> u32 {
    1600
}
fn default_chart_height() -> u32 {
    800
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_file: default_chart_file(),
            width: 1600,
            height: 800,
        }
    }
}

/// Outbound mail configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay hostname
    pub smtp_host: String,

    /// Submission port (STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    pub username: String,
    pub password: String,

    /// Sender address
    pub from: String,

    /// Recipient address
    pub to: String,

    /// Message subject line
    #[serde(default = "default_subject")]
    pub subject: String,
}

fn default_smtp_port() -> u16 {
    587
}
fn default_subject() -> String {
    "Max BTC Price - Last Hour".to_string()
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Append-only log file path
    pub log_file: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_TOML: &str = r#"
        [source]
        endpoint = "https://api.coinbase.com/v2/prices/BTC-USD/spot"
        timeout_secs = 5

        [sampler]
        sample_count = 60
        interval_secs = 60

        [storage]
        data_file = "BTC_price.json"

        [chart]
        output_file = "BTC_graph.png"
        width = 1600
        height = 800

        [email]
        smtp_host = "smtp.gmail.com"
        smtp_port = 587
        username = "bot@example.com"
        password = "app-password"
        from = "bot@example.com"
        to = "reports@example.com"

        [telemetry]
        log_file = "btc_monitor.log"
        log_level = "info"
    "#;

    #[test]
    fn test_config_deserialize() {
        let config: Config = toml::from_str(FULL_TOML).unwrap();
        assert_eq!(
            config.source.endpoint,
            "https://api.coinbase.com/v2/prices/BTC-USD/spot"
        );
        assert_eq!(config.sampler.sample_count, 60);
        assert_eq!(config.email.smtp_port, 587);
        assert_eq!(config.chart.width, 1600);
    }

    #[test]
    fn test_sampler_defaults_when_omitted() {
        let toml = r#"
            [source]
            endpoint = "https://api.coinbase.com/v2/prices/BTC-USD/spot"

            [storage]
            data_file = "BTC_price.json"

            [email]
            smtp_host = "smtp.gmail.com"
            username = "bot@example.com"
            password = "app-password"
            from = "bot@example.com"
            to = "reports@example.com"

            [telemetry]
            log_file = "btc_monitor.log"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.sampler.sample_count, 60);
        assert_eq!(config.sampler.interval_secs, 60);
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.email.smtp_port, 587);
        assert_eq!(config.email.subject, "Max BTC Price - Last Hour");
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.chart.output_file, PathBuf::from("BTC_graph.png"));
    }

    #[test]
    fn test_source_timeout() {
        let config: Config = toml::from_str(FULL_TOML).unwrap();
        assert_eq!(config.source.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(include_str!("../config.toml.example")).unwrap();
        assert_eq!(config.sampler.interval_secs, 60);
    }
}
