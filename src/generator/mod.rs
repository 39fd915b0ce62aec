mod transaction_generator;

pub use transaction_generator::{TransactionGenerator, DEFAULT_LOOKBACK_DAYS};
