use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::engine::errors::MetricsError;
use crate::engine::ranking::{group_by_customer, top_n};
use crate::engine::window::DayWindow;
use crate::engine::MetricsConfig;
use crate::models::{
    ErrorMetrics, FailureReason, MetricsSnapshot, ReasonBreakdown, SpenderEntry, SpenderList, TodayMetrics,
    TopCustomers, TopSpenders, Transaction, YesterdayMetrics
};
use crate::types::{percent_change, percentage, ratio, Monetary, MonetaryError};

const TRAILING_WINDOW_DAYS: u32 = 30;
const RETURNING_CUSTOMER_PAYMENTS: usize = 2;

/// Reduces a transaction history into the figures shown on the dashboard.
///
/// The aggregator is stateless apart from its configuration; every call builds a
/// fresh snapshot from the supplied slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAggregator {
    config: MetricsConfig
}

impl MetricsAggregator {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> MetricsConfig {
        self.config
    }

    /// Computes the snapshot for `reference` over the whole of `transactions`.
    ///
    /// # Errors
    /// Returns `MetricsError` if any transaction fails validation, an
    /// identifier appears more than once, or a volume leaves the cent range.
    /// No partial snapshot is produced in that case.
    pub fn compute(&self, transactions: &[Transaction], reference: NaiveDate) -> Result<MetricsSnapshot, MetricsError> {
        validate_all(transactions)?;

        let history = History::new(transactions, reference);

        let today = history.today_metrics()?;
        let yesterday = history.yesterday_metrics()?;
        let top_customers = history.top_customers(self.config.top_customers_count)?;
        let errors = history.error_metrics()?;
        let top_spenders = history.top_spenders(self.config.top_spenders_count)?;

        debug!(
            "Aggregated [{}] transactions for [{reference}]: [{}] succeeded, [{}] failed today",
            transactions.len(), today.success_count, errors.count
        );

        Ok(MetricsSnapshot {
            today: TodayMetrics {
                new_customers_delta: percent_change(Decimal::from(today.new_customers), Decimal::from(yesterday.new_customers)),
                ..today
            },
            yesterday,
            top_customers,
            errors,
            top_spenders
        })
    }
}

fn validate_all(transactions: &[Transaction]) -> Result<(), MetricsError> {
    let mut seen = HashSet::with_capacity(transactions.len());

    for transaction in transactions {
        transaction.validate()?;

        if !seen.insert(transaction.id.as_str()) {
            return Err(MetricsError::DuplicateTransaction { transaction_id: transaction.id.clone() });
        }
    }

    Ok(())
}

struct History<'a> {
    transactions: &'a [Transaction],
    today: DayWindow,
    yesterday: DayWindow,
    trailing: DayWindow,
    /// Day of each customer's earliest succeeded payment across the whole history.
    first_success: HashMap<&'a str, NaiveDate>
}

impl<'a> History<'a> {
    fn new(transactions: &'a [Transaction], reference: NaiveDate) -> Self {
        let mut first_success: HashMap<&str, NaiveDate> = HashMap::new();

        for transaction in transactions.iter().filter(|transaction| transaction.is_succeeded()) {
            let day = transaction.created_at.date();
            first_success.entry(transaction.customer_id.as_str())
                .and_modify(|earliest| *earliest = (*earliest).min(day))
                .or_insert(day);
        }

        Self {
            transactions,
            today: DayWindow::today(reference),
            yesterday: DayWindow::yesterday(reference),
            trailing: DayWindow::trailing_days(reference, TRAILING_WINDOW_DAYS),
            first_success
        }
    }

    fn succeeded_in(&self, window: DayWindow) -> impl Iterator<Item = &'a Transaction> + use<'a> {
        let transactions: &'a [Transaction] = self.transactions;

        transactions.iter()
            .filter(move |transaction| transaction.is_succeeded() && window.contains(transaction.created_at))
    }

    fn new_customers_on(&self, window: DayWindow) -> usize {
        self.first_success.values().filter(|day| **day == window.first_day()).count()
    }

    fn today_metrics(&self) -> Result<TodayMetrics, MonetaryError> {
        let succeeded: Vec<&Transaction> = self.succeeded_in(self.today).collect();
        let success_volume = Monetary::checked_sum(succeeded.iter().map(|transaction| transaction.amount))?;
        let paying: HashSet<&str> = succeeded.iter().map(|transaction| transaction.customer_id.as_str()).collect();

        let mut trailing_payments: HashMap<&str, usize> = HashMap::new();
        for transaction in self.succeeded_in(self.trailing) {
            *trailing_payments.entry(transaction.customer_id.as_str()).or_default() += 1;
        }

        let returning_customers = paying.iter()
            .filter(|customer_id| trailing_payments.get(*customer_id).copied().unwrap_or(0) >= RETURNING_CUSTOMER_PAYMENTS)
            .count();

        Ok(TodayMetrics {
            success_count: succeeded.len(),
            success_volume,
            paying_customers: paying.len(),
            new_customers: self.new_customers_on(self.today),
            new_customers_delta: Decimal::ZERO,
            returning_customers,
            payments_per_customer: ratio(succeeded.len(), paying.len()),
            average_customer_volume: success_volume.average(paying.len())?
        })
    }

    fn yesterday_metrics(&self) -> Result<YesterdayMetrics, MonetaryError> {
        let succeeded: Vec<&Transaction> = self.succeeded_in(self.yesterday).collect();

        Ok(YesterdayMetrics {
            new_customers: self.new_customers_on(self.yesterday),
            success_count: succeeded.len(),
            success_volume: Monetary::checked_sum(succeeded.iter().map(|transaction| transaction.amount))?
        })
    }

    fn top_customers(&self, limit: usize) -> Result<TopCustomers, MonetaryError> {
        let today = top_n(group_by_customer(self.succeeded_in(self.today))?, limit);
        let yesterday = top_n(group_by_customer(self.succeeded_in(self.yesterday))?, limit);

        let today_total = Monetary::checked_sum(today.iter().map(|customer| customer.total))?;
        let yesterday_total = Monetary::checked_sum(yesterday.iter().map(|customer| customer.total))?;

        Ok(TopCustomers {
            delta: percent_change(today_total.to_decimal(), yesterday_total.to_decimal()),
            today,
            yesterday,
            today_total,
            yesterday_total
        })
    }

    fn error_metrics(&self) -> Result<ErrorMetrics, MonetaryError> {
        let failed: Vec<&Transaction> = self.transactions.iter()
            .filter(|transaction| transaction.is_failed() && self.today.contains(transaction.created_at))
            .collect();

        let succeeded = self.succeeded_in(self.today).count();
        let count = failed.len();

        let breakdown = FailureReason::ALL.into_iter()
            .map(|reason| -> Result<ReasonBreakdown, MonetaryError> {
                let amounts: Vec<Monetary> = failed.iter()
                    .filter(|transaction| transaction.failure_reason == Some(reason))
                    .map(|transaction| transaction.amount)
                    .collect();

                Ok(ReasonBreakdown {
                    count: amounts.len(),
                    volume: Monetary::checked_sum(amounts.iter().copied())?,
                    percent: percentage(Decimal::from(amounts.len()), Decimal::from(count)),
                    ..ReasonBreakdown::empty(reason)
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ErrorMetrics {
            count,
            attempts: count,
            rate: percentage(Decimal::from(count), Decimal::from(count + succeeded)),
            volume: Monetary::checked_sum(failed.iter().map(|transaction| transaction.amount))?,
            breakdown
        })
    }

    fn top_spenders(&self, limit: usize) -> Result<TopSpenders, MonetaryError> {
        let all_succeeded = self.transactions.iter().filter(|transaction| transaction.is_succeeded());

        Ok(TopSpenders {
            all_time: spender_list(all_succeeded, limit)?,
            last_30_days: spender_list(self.succeeded_in(self.trailing), limit)?
        })
    }
}

fn spender_list<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
    limit: usize
) -> Result<SpenderList, MonetaryError> {
    let groups = group_by_customer(transactions)?;
    let grand_total = Monetary::checked_sum(groups.iter().map(|group| group.total))?;

    let entries = top_n(groups, limit).into_iter()
        .map(|group| SpenderEntry {
            percent: percentage(group.total.to_decimal(), grand_total.to_decimal()),
            customer_id: group.customer_id,
            customer_name: group.customer_name,
            total: group.total
        })
        .collect();

    Ok(SpenderList { grand_total, entries })
}
