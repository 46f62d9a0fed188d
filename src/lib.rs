//! btc-monitor: hourly BTC spot price sampler and email reporter
//!
//! This library provides the core components for:
//! - Spot price fetching from the Coinbase API
//! - In-memory sample accumulation and JSON persistence
//! - Time-series chart rendering to PNG
//! - Summary email delivery over SMTP
//! - The sequential pipeline driver tying them together

pub mod chart;
pub mod cli;
pub mod config;
pub mod notify;
pub mod pipeline;
pub mod source;
pub mod store;
pub mod telemetry;
