mod snapshot_cache;
#[cfg(test)]
mod tests;
mod transaction_store;

use crate::models::Transaction;

pub use snapshot_cache::{SnapshotCache, SnapshotKey, DEFAULT_CACHE_CAPACITY};
pub use transaction_store::TransactionStore;

pub trait Storage: Send + Sync + 'static {
    fn load(&self, customer_id: &str) -> Option<Vec<Transaction>>;
    fn save(&self, transaction: Transaction);
}
