//! Notification module
//!
//! Delivers the run summary email with the chart attached

mod email;

pub use email::{EmailNotifier, NotifyError};

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::path::Path;

/// Trait for run summary delivery
#[async_trait]
pub trait Notify: Send + Sync {
    /// Deliver the maximum price for a finished run plus the chart file
    async fn notify(&self, max_price: Decimal, chart_path: &Path) -> Result<(), NotifyError>;
}
