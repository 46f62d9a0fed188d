//! Sample store module
//!
//! Accumulates the run's samples in capture order and persists them to
//! the JSON price log.

mod types;

pub use types::{PersistError, Sample, TIME_FORMAT};

use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;

/// Serialized shape of the price log file
#[derive(Serialize)]
struct PriceLog<'a> {
    data: &'a [Sample],
}

/// In-memory ordered sample sequence for one run
#[derive(Debug, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample, preserving capture order
    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Samples in capture order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum price across the run, `None` when nothing was captured
    pub fn max_price(&self) -> Option<Decimal> {
        self.samples.iter().map(|s| s.price).max()
    }

    /// Write the full sequence to the price log, overwriting any prior file
    pub fn persist(&self, path: &Path) -> Result<(), PersistError> {
        let log = PriceLog {
            data: &self.samples,
        };
        let body = serde_json::to_string_pretty(&log)?;
        std::fs::write(path, body)?;

        tracing::info!(
            "Saved {} samples to {}",
            self.samples.len(),
            path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn sample_at(time: &str, price: Decimal) -> Sample {
        Sample {
            time: NaiveDateTime::parse_from_str(time, TIME_FORMAT).unwrap(),
            price,
        }
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = SampleStore::new();
        store.append(sample_at("2026-08-30 12:00:00", dec!(10)));
        store.append(sample_at("2026-08-30 12:01:00", dec!(20)));
        store.append(sample_at("2026-08-30 12:02:00", dec!(15)));

        let prices: Vec<Decimal> = store.samples().iter().map(|s| s.price).collect();
        assert_eq!(prices, vec![dec!(10), dec!(20), dec!(15)]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_max_price() {
        let mut store = SampleStore::new();
        store.append(sample_at("2026-08-30 12:00:00", dec!(100.0)));
        store.append(sample_at("2026-08-30 12:01:00", dec!(105.5)));
        store.append(sample_at("2026-08-30 12:02:00", dec!(98.2)));
        assert_eq!(store.max_price(), Some(dec!(105.5)));
    }

    #[test]
    fn test_max_price_empty() {
        let store = SampleStore::new();
        assert!(store.is_empty());
        assert_eq!(store.max_price(), None);
    }

    #[test]
    fn test_persist_empty_sequence() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prices.json");

        SampleStore::new().persist(&path).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn test_persist_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prices.json");

        let mut store = SampleStore::new();
        store.append(sample_at("2026-08-30 12:00:00", dec!(10)));
        store.append(sample_at("2026-08-30 12:01:00", dec!(20)));
        store.append(sample_at("2026-08-30 12:02:00", dec!(15)));
        store.persist(&path).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        // Pretty-printed output
        assert!(body.contains('\n'));

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let records = json["data"].as_array().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["time"], "2026-08-30 12:00:00");
        assert_eq!(records[1]["price"].as_f64().unwrap(), 20.0);
        assert_eq!(records[2]["time"], "2026-08-30 12:02:00");
        assert_eq!(records[2]["price"].as_f64().unwrap(), 15.0);
    }

    #[test]
    fn test_persist_overwrites_prior_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prices.json");

        let mut first = SampleStore::new();
        first.append(sample_at("2026-08-30 12:00:00", dec!(10)));
        first.append(sample_at("2026-08-30 12:01:00", dec!(20)));
        first.persist(&path).unwrap();

        let mut second = SampleStore::new();
        second.append(sample_at("2026-08-30 13:00:00", dec!(30)));
        second.persist(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_persist_bad_path_errors() {
        let store = SampleStore::new();
        let result = store.persist(std::path::Path::new("/nonexistent/dir/prices.json"));
        assert!(matches!(result, Err(PersistError::Io(_))));
    }
}
