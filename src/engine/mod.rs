mod aggregator;
mod config;
mod dashboard;
mod errors;
mod ingest;
mod ranking;
mod window;

pub use aggregator::MetricsAggregator;
pub use config::{MetricsConfig, DEFAULT_TOP_CUSTOMERS_COUNT, DEFAULT_TOP_SPENDERS_COUNT};
pub use dashboard::DashboardService;
pub use errors::{ConfigError, MetricsError};
pub use ingest::{load_transactions_async, write_transactions};
