mod customer;
mod errors;
mod failure_reason;
mod snapshot;
mod transaction;

use serde::{Deserialize, Serialize};

pub use customer::{CustomerProfile, CUSTOMERS};
pub use errors::TransactionError;
pub use failure_reason::FailureReason;
pub use snapshot::{
    ErrorMetrics, MetricsSnapshot, RankedCustomer, ReasonBreakdown, SpenderEntry, SpenderList, TodayMetrics,
    TopCustomers, TopSpenders, YesterdayMetrics
};
pub use transaction::Transaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Succeeded,
    Failed
}
