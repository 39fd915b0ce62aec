use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::future::Cache;

use crate::engine::{MetricsConfig, MetricsError};
use crate::generator::TransactionGenerator;
use crate::models::MetricsSnapshot;

pub const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Everything a generated snapshot depends on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SnapshotKey {
    pub reference: NaiveDate,
    pub generator: TransactionGenerator,
    pub config: MetricsConfig
}

/// Memoizes snapshots outside of the pure computation.
///
/// Concurrent requests for the same key share one computation.
#[derive(Clone)]
pub struct SnapshotCache {
    cache: Cache<SnapshotKey, Arc<MetricsSnapshot>>
}

impl SnapshotCache {
    pub fn new(capacity: u64, time_to_live: Option<Duration>) -> Self {
        let mut builder = Cache::builder().max_capacity(capacity);

        if let Some(time_to_live) = time_to_live {
            builder = builder.time_to_live(time_to_live);
        }

        Self { cache: builder.build() }
    }

    pub async fn get_or_compute<F>(&self, key: SnapshotKey, compute: F) -> Result<Arc<MetricsSnapshot>, Arc<MetricsError>>
    where
        F: FnOnce() -> Result<MetricsSnapshot, MetricsError>,
    {
        self.cache
            .try_get_with(key, async move { compute().map(Arc::new) })
            .await
    }

    #[cfg(test)]
    pub async fn contains(&self, key: &SnapshotKey) -> bool {
        self.cache.get(key).await.is_some()
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY, None)
    }
}
