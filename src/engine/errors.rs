use std::io;

use thiserror::Error;

use crate::models::TransactionError;
use crate::types::{MonetaryError, TransactionId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: [{field}] must not be negative, got [{value}]")]
    Negative {
        field: &'static str,
        value: i64
    },
    #[error("Configuration error: [{field}] is out of range, got [{value}]")]
    OutOfRange {
        field: &'static str,
        value: i64
    }
}

impl ConfigError {
    pub fn for_value(field: &'static str, value: i64) -> Self {
        if value < 0 {
            Self::Negative { field, value }
        } else {
            Self::OutOfRange { field, value }
        }
    }
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(#[from] TransactionError),
    #[error("Duplicate transaction [{transaction_id}] in input")]
    DuplicateTransaction {
        transaction_id: TransactionId
    },
    #[error("Aggregated volume is out of range: {0}")]
    Overflow(#[from] MonetaryError)
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Error opening transactions file: {0}")]
    Io(#[from] io::Error),
    #[error("Error reading transactions: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid transaction on row [{row}]: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: TransactionError
    },
    #[error("Transaction ingestion task failed: {0}")]
    Join(#[from] tokio::task::JoinError)
}
