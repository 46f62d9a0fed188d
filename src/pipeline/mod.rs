//! Pipeline driver module
//!
//! One run walks Sampling → Persisting → Rendering → Summarizing →
//! Notifying in order. Transitions are unconditional: step failures are
//! logged at the component boundary and never abort the run.

use crate::chart::ChartRenderer;
use crate::config::Config;
use crate::notify::Notify;
use crate::source::PriceSource;
use crate::store::{Sample, SampleStore};
use rust_decimal::Decimal;
use std::time::Duration;

/// Maximum price observed during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    /// Every fetch failed; there is nothing to report
    NoData,
    Max(Decimal),
}

impl RunSummary {
    fn from_store(store: &SampleStore) -> Self {
        match store.max_price() {
            Some(max) => Self::Max(max),
            None => Self::NoData,
        }
    }

    pub fn max(&self) -> Option<Decimal> {
        match self {
            Self::Max(max) => Some(*max),
            Self::NoData => None,
        }
    }
}

/// Outcome of one full run
#[derive(Debug)]
pub struct RunReport {
    pub samples_collected: usize,
    pub summary: RunSummary,
}

/// Drives one bounded sample-persist-render-notify run
pub struct Pipeline<S, N> {
    config: Config,
    source: S,
    notifier: N,
}

impl<S, N> Pipeline<S, N>
where
    S: PriceSource,
    N: Notify,
{
    pub fn new(config: Config, source: S, notifier: N) -> Self {
        Self {
            config,
            source,
            notifier,
        }
    }

    /// Execute one full run and report what happened.
    pub async fn run(&self) -> RunReport {
        let store = self.sample().await;

        if let Err(e) = store.persist(&self.config.storage.data_file) {
            tracing::error!("Error saving data: {}", e);
        }

        let renderer = ChartRenderer::new(self.config.chart.clone());
        if let Err(e) = renderer.render(store.samples()) {
            tracing::error!("Error creating chart: {}", e);
        }

        let summary = RunSummary::from_store(&store);

        match summary {
            RunSummary::Max(max) => {
                if let Err(e) = self
                    .notifier
                    .notify(max, &self.config.chart.output_file)
                    .await
                {
                    tracing::error!("Failed to send email: {}", e);
                }
            }
            RunSummary::NoData => {
                tracing::warn!("No samples captured this run, skipping email");
            }
        }

        RunReport {
            samples_collected: store.len(),
            summary,
        }
    }

    /// Sampling state: one fetch per tick, a fixed delay between ticks.
    /// A failed fetch is logged and produces no sample.
    async fn sample(&self) -> SampleStore {
        let mut store = SampleStore::new();
        let interval = Duration::from_secs(self.config.sampler.interval_secs);
        let count = self.config.sampler.sample_count;

        for tick in 0..count {
            match self.source.fetch_price().await {
                Ok(price) => store.append(Sample::now(price)),
                Err(e) => tracing::error!("Error fetching BTC price: {}", e),
            }

            if tick + 1 < count {
                tokio::time::sleep(interval).await;
            }
        }

        store
    }
}
