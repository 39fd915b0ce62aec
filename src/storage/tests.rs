use super::{SnapshotCache, SnapshotKey, Storage, TransactionStore};

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::engine::{MetricsAggregator, MetricsConfig};
use crate::generator::TransactionGenerator;

fn reference_date() -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(2026, 1, 25).ok_or_else(|| anyhow!("invalid reference date"))
}

#[test]
fn test_store_indexes_history_by_customer_newest_first() -> Result<()> {
    let transactions = TransactionGenerator::new(3).generate(reference_date()?);
    let expected = transactions.iter().filter(|transaction| transaction.customer_id == "cus_fjord").count();

    let store = TransactionStore::from_transactions(transactions);
    let history = store.load("cus_fjord").ok_or_else(|| anyhow!("customer missing from store"))?;

    assert_eq!(history.len(), expected);
    assert!(history.iter().all(|transaction| transaction.customer_id == "cus_fjord"));
    assert!(history.windows(2).all(|pair| pair[0].created_at >= pair[1].created_at));

    Ok(())
}

#[test]
fn test_store_returns_nothing_for_unknown_customer() -> Result<()> {
    let store = TransactionStore::from_transactions(TransactionGenerator::new(1).generate(reference_date()?));

    assert!(store.load("cus_unknown").is_none());
    assert_eq!(store.iter().count(), 10);

    Ok(())
}

#[tokio::test]
async fn test_store_accepts_saves_from_concurrent_tasks() -> Result<()> {
    let transactions = TransactionGenerator::new(5).generate(reference_date()?);
    let total = transactions.len();
    let store = Arc::new(TransactionStore::new());

    let handles: Vec<_> = transactions.chunks(10)
        .map(|chunk| {
            let store = store.clone();
            let chunk = chunk.to_vec();
            tokio::spawn(async move {
                for transaction in chunk {
                    store.save(transaction);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await?;
    }

    let stored: usize = store.iter().map(|entry| entry.value().len()).sum();

    assert_eq!(stored, total);

    Ok(())
}

#[tokio::test]
async fn test_snapshot_cache_computes_each_key_once() -> Result<()> {
    let cache = SnapshotCache::default();
    let reference = reference_date()?;
    let key = SnapshotKey {
        reference,
        generator: TransactionGenerator::new(1),
        config: MetricsConfig::default()
    };

    assert!(!cache.contains(&key).await);

    let compute = || MetricsAggregator::default().compute(&TransactionGenerator::new(1).generate(reference), reference);
    let first = cache.get_or_compute(key, compute).await.map_err(|error| anyhow!("{error}"))?;
    let second = cache.get_or_compute(key, || Err(crate::engine::MetricsError::DuplicateTransaction {
        transaction_id: "never computed".to_string()
    })).await.map_err(|error| anyhow!("{error}"))?;

    assert!(Arc::ptr_eq(&first, &second));
    assert!(cache.contains(&key).await);

    Ok(())
}

#[tokio::test]
async fn test_snapshot_cache_does_not_store_failures() -> Result<()> {
    let cache = SnapshotCache::default();
    let key = SnapshotKey {
        reference: reference_date()?,
        generator: TransactionGenerator::default(),
        config: MetricsConfig::default()
    };

    let result = cache.get_or_compute(key, || Err(crate::engine::MetricsError::DuplicateTransaction {
        transaction_id: "t1".to_string()
    })).await;

    assert!(result.is_err());
    assert!(!cache.contains(&key).await);

    Ok(())
}
