//! Transaction repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use cg_shared::types::Pagination;

use crate::domain::entities::transaction::{CustomerSummary, Transaction, TransactionView};
use crate::errors::DomainError;

/// Repository trait for purchase transactions
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Insert a transaction
    async fn create(&self, transaction: Transaction) -> Result<Transaction, DomainError>;

    /// One page of a user's transactions, newest first, with the total count
    async fn list_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<(Vec<TransactionView>, u64), DomainError>;

    /// Per-customer totals at a restaurant, last transaction newest first
    async fn customer_summaries(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<CustomerSummary>, DomainError>;
}
