mod errors;
mod monetary;
mod percent;
#[cfg(test)]
mod tests;

pub use errors::MonetaryError;
pub use monetary::Monetary;
pub use percent::{percent_change, percentage, ratio};

pub type CustomerId = String;
pub type TransactionId = String;
