//! Price source module
//!
//! Provides the current BTC-USD spot price from the Coinbase API

mod coinbase;
mod types;

pub use coinbase::CoinbaseSource;
pub use types::FetchError;

use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for spot price source implementations
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current spot price
    async fn fetch_price(&self) -> Result<Decimal, FetchError>;
}
