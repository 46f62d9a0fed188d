//! Sample types

use chrono::{Local, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wall-clock format used in the persisted price log
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single (timestamp, price) observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Local capture time, second precision
    #[serde(with = "sample_time")]
    pub time: NaiveDateTime,
    /// Spot price in USD
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Sample {
    /// Create a sample stamped with the current local time
    pub fn now(price: Decimal) -> Self {
        let now = Local::now().naive_local();
        Self {
            time: now.with_nanosecond(0).unwrap_or(now),
            price,
        }
    }
}

/// Price log persistence errors
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("serialize failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` time strings
mod sample_time {
    use super::TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
