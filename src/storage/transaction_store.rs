use std::cmp::Reverse;
use std::sync::Arc;

use dashmap::iter::Iter;
use dashmap::DashMap;

use crate::models::Transaction;
use crate::storage::Storage;
use crate::types::CustomerId;

/// In-memory payment history indexed by customer.
pub struct TransactionStore {
    cache: Arc<DashMap<CustomerId, Vec<Transaction>>>
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new())
        }
    }

    pub fn from_transactions(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let store = Self::new();

        for transaction in transactions {
            store.save(transaction);
        }

        store
    }

    pub fn iter(&self) -> Iter<'_, CustomerId, Vec<Transaction>> {
        self.cache.iter()
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for TransactionStore {
    /// Returns the customer's transactions, newest first.
    fn load(&self, customer_id: &str) -> Option<Vec<Transaction>> {
        self.cache.get(customer_id).map(|entry| {
            let mut history = entry.value().clone();
            history.sort_by_key(|transaction| Reverse(transaction.created_at));
            history
        })
    }

    fn save(&self, transaction: Transaction) {
        self.cache.entry(transaction.customer_id.clone())
            .or_default()
            .push(transaction);
    }
}
