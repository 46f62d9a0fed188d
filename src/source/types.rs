//! Price source types

use thiserror::Error;

/// Spot price fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level failure
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Endpoint answered with a non-200 status
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    /// Body did not contain a usable price
    #[error("malformed quote body: {0}")]
    Parse(String),
}
