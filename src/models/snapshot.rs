use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::FailureReason;
use crate::types::{CustomerId, Monetary};

/// Every figure the dashboard cards display, computed for one reference date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub today: TodayMetrics,
    pub yesterday: YesterdayMetrics,
    pub top_customers: TopCustomers,
    pub errors: ErrorMetrics,
    pub top_spenders: TopSpenders
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayMetrics {
    pub success_count: usize,
    pub success_volume: Monetary,
    /// Distinct customers with at least one succeeded payment today.
    pub paying_customers: usize,
    pub new_customers: usize,
    /// Change of `new_customers` against yesterday, in percent.
    pub new_customers_delta: Decimal,
    pub returning_customers: usize,
    pub payments_per_customer: Decimal,
    pub average_customer_volume: Monetary
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YesterdayMetrics {
    pub new_customers: usize,
    pub success_count: usize,
    pub success_volume: Monetary
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCustomer {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub total: Monetary,
    pub payments: usize
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomers {
    pub today: Vec<RankedCustomer>,
    pub yesterday: Vec<RankedCustomer>,
    pub today_total: Monetary,
    pub yesterday_total: Monetary,
    pub delta: Decimal
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasonBreakdown {
    pub reason: FailureReason,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub volume: Monetary,
    pub percent: Decimal
}

impl ReasonBreakdown {
    pub fn empty(reason: FailureReason) -> Self {
        Self {
            reason,
            label: reason.label(),
            color: reason.color(),
            count: 0,
            volume: Monetary::new(),
            percent: Decimal::ZERO
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMetrics {
    pub count: usize,
    pub attempts: usize,
    pub rate: Decimal,
    pub volume: Monetary,
    /// One entry per catalog reason, in catalog order.
    pub breakdown: Vec<ReasonBreakdown>
}

impl Default for ErrorMetrics {
    fn default() -> Self {
        Self {
            count: 0,
            attempts: 0,
            rate: Decimal::ZERO,
            volume: Monetary::new(),
            breakdown: FailureReason::ALL.into_iter().map(ReasonBreakdown::empty).collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpenderEntry {
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub total: Monetary,
    /// Share of the list's `grand_total`, one decimal place.
    pub percent: Decimal
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpenderList {
    /// Succeeded volume of every customer in the window, not only the listed ones.
    pub grand_total: Monetary,
    pub entries: Vec<SpenderEntry>
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSpenders {
    pub all_time: SpenderList,
    pub last_30_days: SpenderList
}
