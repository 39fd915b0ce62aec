use crate::engine::errors::ConfigError;

pub const DEFAULT_TOP_CUSTOMERS_COUNT: usize = 3;
pub const DEFAULT_TOP_SPENDERS_COUNT: usize = 5;

/// Sizes of the ranked lists in a snapshot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct MetricsConfig {
    pub top_customers_count: usize,
    pub top_spenders_count: usize
}

impl MetricsConfig {
    /// Builds a config from signed values as supplied by outer surfaces, rejecting negatives.
    pub fn try_new(top_customers_count: i64, top_spenders_count: i64) -> Result<Self, ConfigError> {
        Ok(Self {
            top_customers_count: to_count("top_customers_count", top_customers_count)?,
            top_spenders_count: to_count("top_spenders_count", top_spenders_count)?
        })
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            top_customers_count: DEFAULT_TOP_CUSTOMERS_COUNT,
            top_spenders_count: DEFAULT_TOP_SPENDERS_COUNT
        }
    }
}

fn to_count(field: &'static str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::for_value(field, value))
}
