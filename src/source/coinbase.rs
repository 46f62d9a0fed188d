//! Coinbase spot price client
//!
//! Issues one GET per sample against `/v2/prices/BTC-USD/spot` and parses
//! the nested amount field out of the JSON body.

use super::{FetchError, PriceSource};
use crate::config::SourceConfig;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Coinbase spot price response body
#[derive(Debug, Deserialize)]
struct SpotPriceResponse {
    data: SpotPrice,
}

#[derive(Debug, Deserialize)]
struct SpotPrice {
    /// Price as a decimal string, e.g. "50000.12"
    amount: String,
}

/// HTTP client for the Coinbase spot price endpoint
pub struct CoinbaseSource {
    client: Client,
    endpoint: String,
}

impl CoinbaseSource {
    /// Create a new source with a bounded request timeout
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Parse a spot price body into a price
    fn parse_spot_response(body: &str) -> Result<Decimal, FetchError> {
        let response: SpotPriceResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

        let price = Decimal::from_str(&response.data.amount).map_err(|e| {
            FetchError::Parse(format!("bad amount '{}': {}", response.data.amount, e))
        })?;

        if price.is_sign_negative() {
            return Err(FetchError::Parse(format!("negative amount '{}'", price)));
        }

        Ok(price)
    }
}

#[async_trait]
impl PriceSource for CoinbaseSource {
    async fn fetch_price(&self) -> Result<Decimal, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        let price = Self::parse_spot_response(&body)?;

        tracing::info!("BTC price: {}", price);

        Ok(price)
    }
}
