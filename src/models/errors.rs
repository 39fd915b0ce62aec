use crate::models::{FailureReason, Transaction};
use crate::types::{CustomerId, Monetary, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Transaction [{transaction_id}] for customer [{customer_id}] has an empty [{field}] field")]
    EmptyField {
        transaction_id: TransactionId,
        customer_id: CustomerId,
        field: &'static str
    },
    #[error("Amount [{amount}] must not be negative for transaction [{transaction_id}] for customer [{customer_id}]")]
    NegativeAmount {
        transaction_id: TransactionId,
        customer_id: CustomerId,
        amount: Monetary
    },
    #[error("Failed transaction [{transaction_id}] for customer [{customer_id}] has no failure reason")]
    MissingFailureReason {
        transaction_id: TransactionId,
        customer_id: CustomerId
    },
    #[error("Succeeded transaction [{transaction_id}] for customer [{customer_id}] carries failure reason [{reason:?}]")]
    UnexpectedFailureReason {
        transaction_id: TransactionId,
        customer_id: CustomerId,
        reason: FailureReason
    }
}

impl TransactionError {
    pub fn empty_field(tx: &Transaction, field: &'static str) -> Self {
        Self::EmptyField {
            transaction_id: tx.id.clone(),
            customer_id: tx.customer_id.clone(),
            field
        }
    }

    pub fn negative_amount(tx: &Transaction) -> Self {
        Self::NegativeAmount {
            transaction_id: tx.id.clone(),
            customer_id: tx.customer_id.clone(),
            amount: tx.amount
        }
    }

    pub fn missing_failure_reason(tx: &Transaction) -> Self {
        Self::MissingFailureReason {
            transaction_id: tx.id.clone(),
            customer_id: tx.customer_id.clone()
        }
    }

    pub fn unexpected_failure_reason(tx: &Transaction, reason: FailureReason) -> Self {
        Self::UnexpectedFailureReason {
            transaction_id: tx.id.clone(),
            customer_id: tx.customer_id.clone(),
            reason
        }
    }
}
