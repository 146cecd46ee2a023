//! Paginated transaction history for customers

use std::sync::Arc;
use uuid::Uuid;

use cg_shared::types::{PaginatedResponse, Pagination};

use crate::domain::entities::transaction::TransactionView;
use crate::errors::DomainResult;
use crate::repositories::TransactionRepository;

pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    /// One page of the user's transactions, newest first
    ///
    /// Out-of-range page sizes are clamped to `1..=100`.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> DomainResult<PaginatedResponse<TransactionView>> {
        let pagination = pagination.validate();
        let (results, count) = self.repository.list_by_user(user_id, pagination).await?;
        Ok(PaginatedResponse::new(results, pagination, count))
    }
}
