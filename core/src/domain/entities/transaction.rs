//! Purchase transactions and the per-customer aggregates built from them.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cg_shared::utils::search::contains_ignore_case;

/// A purchase at a restaurant with the discount applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub cashier_id: Option<Uuid>,
    pub sum_before_discount: Decimal,
    pub discount_percentage: Decimal,
    pub sum_after_discount: Decimal,
    pub discount_amount_uzs: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Applies `discount_percentage` to `sum_before_discount`.
    ///
    /// The discount is rounded half away from zero to two decimal places and
    /// `sum_after_discount` is always `sum_before_discount - discount_amount_uzs`.
    pub fn with_discount(
        user_id: Uuid,
        restaurant_id: Uuid,
        cashier_id: Option<Uuid>,
        sum_before_discount: Decimal,
        discount_percentage: Decimal,
    ) -> Self {
        let discount_amount_uzs = (sum_before_discount * discount_percentage / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            user_id,
            restaurant_id,
            cashier_id,
            sum_before_discount,
            discount_percentage,
            sum_after_discount: sum_before_discount - discount_amount_uzs,
            discount_amount_uzs,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Transaction row shown to the customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionView {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub restaurant_name: String,
}

/// Aggregated spending of one customer at one restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub user_id: Uuid,
    pub phone_number: Option<String>,
    pub full_name: String,
    pub total_transactions: u64,
    pub total_before_discount: Decimal,
    pub total_discount: Decimal,
    pub total_after_discount: Decimal,
    pub last_transaction_date: Option<DateTime<Utc>>,
}

/// Filters for the admin customer list and export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFilter {
    /// Inclusive lower bound on the last transaction date
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the last transaction date
    pub date_to: Option<NaiveDate>,
    /// Lower bound on total spent after discount
    pub min_spent: Option<Decimal>,
    pub max_spent: Option<Decimal>,
    pub min_transactions: Option<u64>,
    pub max_transactions: Option<u64>,
    /// Case-insensitive match on phone number or full name
    pub search: Option<String>,
}

impl CustomerFilter {
    pub fn matches(&self, summary: &CustomerSummary) -> bool {
        let last_date = summary.last_transaction_date.map(|at| at.date_naive());

        if let Some(from) = self.date_from {
            if !last_date.is_some_and(|date| date >= from) {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if !last_date.is_some_and(|date| date <= to) {
                return false;
            }
        }
        if self.min_spent.is_some_and(|min| summary.total_after_discount < min) {
            return false;
        }
        if self.max_spent.is_some_and(|max| summary.total_after_discount > max) {
            return false;
        }
        if self.min_transactions.is_some_and(|min| summary.total_transactions < min) {
            return false;
        }
        if self.max_transactions.is_some_and(|max| summary.total_transactions > max) {
            return false;
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = search.to_lowercase();
            let phone_hit = summary
                .phone_number
                .as_deref()
                .is_some_and(|phone| contains_ignore_case(phone, &needle));
            if !phone_hit && !contains_ignore_case(&summary.full_name, &needle) {
                return false;
            }
        }
        true
    }
}

/// Folds a restaurant's transactions into per-customer summaries.
///
/// `lookup` resolves a user id to `(phone_number, full_name)`. The result is
/// ordered by last transaction, newest first.
pub fn summarize_customers<F>(transactions: &[Transaction], mut lookup: F) -> Vec<CustomerSummary>
where
    F: FnMut(Uuid) -> (Option<String>, String),
{
    let mut by_user: HashMap<Uuid, CustomerSummary> = HashMap::new();

    for tx in transactions {
        match by_user.entry(tx.user_id) {
            Entry::Occupied(mut entry) => {
                let summary = entry.get_mut();
                summary.total_transactions += 1;
                summary.total_before_discount += tx.sum_before_discount;
                summary.total_discount += tx.discount_amount_uzs;
                summary.total_after_discount += tx.sum_after_discount;
                if summary.last_transaction_date.map_or(true, |last| tx.created_at > last) {
                    summary.last_transaction_date = Some(tx.created_at);
                }
            }
            Entry::Vacant(entry) => {
                let (phone_number, full_name) = lookup(tx.user_id);
                entry.insert(CustomerSummary {
                    user_id: tx.user_id,
                    phone_number,
                    full_name,
                    total_transactions: 1,
                    total_before_discount: tx.sum_before_discount,
                    total_discount: tx.discount_amount_uzs,
                    total_after_discount: tx.sum_after_discount,
                    last_transaction_date: Some(tx.created_at),
                });
            }
        }
    }

    let mut summaries: Vec<CustomerSummary> = by_user.into_values().collect();
    // Ties keep a stable order by user id
    summaries.sort_by(|a, b| {
        b.last_transaction_date
            .cmp(&a.last_transaction_date)
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    summaries
}
