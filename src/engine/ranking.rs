use std::collections::HashMap;

use crate::models::{RankedCustomer, Transaction};
use crate::types::{Monetary, MonetaryError};

/// Sums succeeded amounts per customer, in order of each customer's first appearance.
pub fn group_by_customer<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>
) -> Result<Vec<RankedCustomer>, MonetaryError> {
    let mut groups: Vec<RankedCustomer> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let position = *positions.entry(transaction.customer_id.as_str()).or_insert_with(|| {
            groups.push(RankedCustomer {
                customer_id: transaction.customer_id.clone(),
                customer_name: transaction.customer_name.clone(),
                total: Monetary::new(),
                payments: 0
            });
            groups.len() - 1
        });

        let group = &mut groups[position];
        group.total = group.total.checked_add(transaction.amount).ok_or(MonetaryError::Overflow)?;
        group.payments += 1;
    }

    Ok(groups)
}

/// Orders groups by total, largest first, and keeps the first `limit`.
///
/// The sort is stable: equal totals keep first-appearance order.
pub fn top_n(mut groups: Vec<RankedCustomer>, limit: usize) -> Vec<RankedCustomer> {
    groups.sort_by(|left, right| right.total.cmp(&left.total));
    groups.truncate(limit);
    groups
}
