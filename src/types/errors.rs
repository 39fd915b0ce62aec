use std::num::ParseIntError;

use thiserror::Error;

/// Failures converting text or decimals into cent amounts.
#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Invalid amount: {0}")]
    InvalidFormat(String),
    #[error("Invalid amount digits: {0}")]
    ParseInt(#[from] ParseIntError),
    #[error("Amount does not fit in cents: Overflow")]
    Overflow
}
