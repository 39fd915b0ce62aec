use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::errors::TransactionError;
use crate::models::{FailureReason, TransactionStatus};
use crate::types::{CustomerId, Monetary, TransactionId};

/// A single payment attempt.
///
/// The same shape is used for generated history and for rows loaded from CSV,
/// which is why `validate` exists: only loaded rows can break the
/// status / failure-reason pairing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sortable identifier, unique within a collection.
    pub id: TransactionId,
    pub customer_id: CustomerId,
    /// Denormalized display name of the customer.
    pub customer_name: String,
    pub amount: Monetary,
    /// Lowercase ISO currency code.
    pub currency: String,
    pub status: TransactionStatus,
    /// Set only when `status` is `Failed`.
    pub failure_reason: Option<FailureReason>,
    pub created_at: NaiveDateTime
}

impl Transaction {
    pub fn is_succeeded(&self) -> bool {
        self.status == TransactionStatus::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.status == TransactionStatus::Failed
    }

    /// Checks the record is complete and its status agrees with its failure reason.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.id.trim().is_empty() {
            return Err(TransactionError::empty_field(self, "id"))
        }

        if self.customer_id.trim().is_empty() {
            return Err(TransactionError::empty_field(self, "customer_id"))
        }

        if self.currency.trim().is_empty() {
            return Err(TransactionError::empty_field(self, "currency"))
        }

        if self.amount.is_negative() {
            return Err(TransactionError::negative_amount(self))
        }

        match (self.status, self.failure_reason) {
            (TransactionStatus::Failed, None) => Err(TransactionError::missing_failure_reason(self)),
            (TransactionStatus::Succeeded, Some(reason)) => Err(TransactionError::unexpected_failure_reason(self, reason)),
            _ => Ok(())
        }
    }
}
