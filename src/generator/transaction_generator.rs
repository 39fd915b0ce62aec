use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, error, warn};

use crate::engine::ConfigError;
use crate::models::{CustomerProfile, FailureReason, Transaction, TransactionStatus, CUSTOMERS};
use crate::types::Monetary;

pub const DEFAULT_LOOKBACK_DAYS: u32 = 60;

const BASE_TRANSACTIONS_PER_DAY: u64 = 14;
const TRANSACTIONS_PER_DAY_SPREAD: u64 = 9;
const BASE_AMOUNT: u64 = 38;
const AMOUNT_SPREAD: u64 = 140;
const WEEKLY_SPIKE: u64 = 80;
const LARGE_SPIKE: u64 = 120;
const HOURLY_RATE: Decimal = dec!(0.4);
const FAILURE_MODULUS: u64 = 12;
const CURRENCY: &str = "usd";

/// Deterministic synthesizer of a multi-day payment history.
///
/// Output depends only on the reference date and the lookback: no clock and no
/// entropy source is consulted, so repeated calls produce identical sequences.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TransactionGenerator {
    lookback_days: u32
}

impl TransactionGenerator {
    pub fn new(lookback_days: u32) -> Self {
        Self { lookback_days }
    }

    /// Builds a generator from a signed day count as supplied by outer surfaces.
    pub fn try_new(lookback_days: i64) -> Result<Self, ConfigError> {
        u32::try_from(lookback_days)
            .map(Self::new)
            .map_err(|_| ConfigError::for_value("lookback_days", lookback_days))
    }

    pub fn lookback_days(&self) -> u32 {
        self.lookback_days
    }

    /// Produces the history for days `[reference - lookback + 1, reference]`.
    ///
    /// Days are emitted newest first, transactions within a day by index.
    pub fn generate(&self, reference: NaiveDate) -> Vec<Transaction> {
        let horizon = CUSTOMERS.iter().map(|customer| customer.start_offset).max().unwrap_or(0);
        let active_days = self.lookback_days.min(horizon.saturating_add(1));

        if active_days < self.lookback_days {
            debug!("No customers are onboarded beyond {horizon} days, skipping {} days", self.lookback_days - active_days);
        }

        let mut transactions = Vec::new();

        for offset in 0..active_days {
            let Some(day) = reference.checked_sub_days(Days::new(u64::from(offset))) else {
                warn!("Day offset [{offset}] before [{reference}] is out of the calendar range");
                break;
            };

            let pool: Vec<&CustomerProfile> = CUSTOMERS.iter()
                .filter(|customer| customer.is_eligible(offset))
                .collect();

            if pool.is_empty() {
                warn!("No customers are eligible on [{day}], skipping the day");
                continue;
            }

            let seed = day_seed(day, offset);
            let count = BASE_TRANSACTIONS_PER_DAY + seed % TRANSACTIONS_PER_DAY_SPREAD;

            transactions.extend((0..count).map(|index| synthesize(day, seed, index, &pool)));

            debug!("Generated [{count}] transactions for [{day}] from [{}] eligible customers", pool.len());
        }

        transactions
    }
}

impl Default for TransactionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LOOKBACK_DAYS)
    }
}

fn day_seed(day: NaiveDate, offset: u32) -> u64 {
    u64::from(day.day()) * 13 + u64::from(day.month()) * 7 + u64::from(offset) * 3
}

fn synthesize(day: NaiveDate, seed: u64, index: u64, pool: &[&CustomerProfile]) -> Transaction {
    let customer = pool[((seed + index * 3) % pool.len() as u64) as usize];
    let hour = (seed + index * 2) % 24;
    let minute = (seed * 7 + index * 11) % 60;

    let failed = matches!((seed + index * 5) % FAILURE_MODULUS, 0 | 9);
    let (status, failure_reason) = if failed {
        let reason = FailureReason::ALL[((seed + index) % FailureReason::ALL.len() as u64) as usize];
        (TransactionStatus::Failed, Some(reason))
    } else {
        (TransactionStatus::Succeeded, None)
    };

    Transaction {
        id: format!("txn_{}_{:03}", day.format("%Y%m%d"), index),
        customer_id: customer.id.to_string(),
        customer_name: customer.name.to_string(),
        amount: amount(seed, index, hour, customer.weight),
        currency: CURRENCY.to_string(),
        status,
        failure_reason,
        created_at: timestamp(day, hour, minute)
    }
}

fn amount(seed: u64, index: u64, hour: u64, weight: Decimal) -> Monetary {
    let mut base = BASE_AMOUNT + (seed * 11 + index * 13) % AMOUNT_SPREAD;

    if index % 7 == 0 {
        base += WEEKLY_SPIKE;
    }

    if index % 13 == 0 {
        base += LARGE_SPIKE;
    }

    let raw = (Decimal::from(base) + Decimal::from(hour) * HOURLY_RATE) * weight;

    Monetary::from_decimal(raw).unwrap_or_else(|error| {
        error!("Generated amount [{raw}] could not be represented: {error}");
        Monetary::new()
    })
}

fn timestamp(day: NaiveDate, hour: u64, minute: u64) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN) + Duration::minutes((hour * 60 + minute) as i64)
}
