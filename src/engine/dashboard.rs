use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::debug;

use crate::engine::{MetricsAggregator, MetricsConfig, MetricsError};
use crate::generator::TransactionGenerator;
use crate::models::{MetricsSnapshot, Transaction};
use crate::storage::{SnapshotCache, SnapshotKey, DEFAULT_CACHE_CAPACITY};

/// Entry point for dashboard consumers: generates history, aggregates it and
/// memoizes the result per reference date.
pub struct DashboardService {
    generator: TransactionGenerator,
    aggregator: MetricsAggregator,
    cache: SnapshotCache,
    cache_capacity: u64,
    cache_timeout: Option<Duration>
}

impl DashboardService {
    pub fn new(generator: TransactionGenerator, config: MetricsConfig) -> Self {
        Self {
            generator,
            aggregator: MetricsAggregator::new(config),
            cache: SnapshotCache::new(DEFAULT_CACHE_CAPACITY, None),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_timeout: None
        }
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self.cache = SnapshotCache::new(capacity, self.cache_timeout);
        self
    }

    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = Some(timeout);
        self.cache = SnapshotCache::new(self.cache_capacity, self.cache_timeout);
        self
    }

    /// The synthetic history the generated snapshots are computed from.
    pub fn transactions(&self, reference: NaiveDate) -> Vec<Transaction> {
        self.generator.generate(reference)
    }

    /// Snapshot over generated history, computed once per reference date while cached.
    pub async fn generated_snapshot(&self, reference: NaiveDate) -> Result<Arc<MetricsSnapshot>, Arc<MetricsError>> {
        let key = SnapshotKey {
            reference,
            generator: self.generator,
            config: self.aggregator.config()
        };

        let generator = self.generator;
        let aggregator = self.aggregator;

        self.cache.get_or_compute(key, move || {
            debug!("Snapshot cache miss for [{reference}]");
            aggregator.compute(&generator.generate(reference), reference)
        }).await
    }

    /// Snapshot over a caller supplied collection. Not cached, the caller owns the data.
    pub fn snapshot_of(&self, transactions: &[Transaction], reference: NaiveDate) -> Result<MetricsSnapshot, MetricsError> {
        self.aggregator.compute(transactions, reference)
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(TransactionGenerator::default(), MetricsConfig::default())
    }
}
