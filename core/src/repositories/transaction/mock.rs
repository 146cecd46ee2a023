//! In-memory implementation of TransactionRepository
//!
//! Joins against users and restaurants go through the mock repositories
//! passed at construction.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use cg_shared::types::Pagination;

use crate::domain::entities::transaction::{
    summarize_customers, CustomerSummary, Transaction, TransactionView,
};
use crate::errors::DomainError;
use crate::repositories::restaurant::{MockRestaurantRepository, RestaurantRepository};
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::trait_::TransactionRepository;

/// Mock transaction repository for testing
#[derive(Clone)]
pub struct MockTransactionRepository {
    transactions: Arc<RwLock<Vec<Transaction>>>,
    users: MockUserRepository,
    restaurants: MockRestaurantRepository,
}

impl MockTransactionRepository {
    /// Create a repository joined to the given user and restaurant mocks
    pub fn new(users: MockUserRepository, restaurants: MockRestaurantRepository) -> Self {
        Self {
            transactions: Arc::new(RwLock::new(Vec::new())),
            users,
            restaurants,
        }
    }

    /// Every stored transaction
    pub async fn all(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }
}

#[async_trait]
impl TransactionRepository for MockTransactionRepository {
    async fn create(&self, transaction: Transaction) -> Result<Transaction, DomainError> {
        self.transactions.write().await.push(transaction.clone());
        Ok(transaction)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<(Vec<TransactionView>, u64), DomainError> {
        let mut mine: Vec<Transaction> = self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = mine.len() as u64;

        let mut views = Vec::new();
        for transaction in mine
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
        {
            let restaurant_name = self
                .restaurants
                .find_by_id(transaction.restaurant_id)
                .await?
                .map(|r| r.name)
                .unwrap_or_default();
            views.push(TransactionView {
                transaction,
                restaurant_name,
            });
        }

        Ok((views, total))
    }

    async fn customer_summaries(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<CustomerSummary>, DomainError> {
        let at_restaurant: Vec<Transaction> = self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| t.restaurant_id == restaurant_id)
            .cloned()
            .collect();

        let mut customers = HashMap::new();
        for tx in &at_restaurant {
            if !customers.contains_key(&tx.user_id) {
                let user = self.users.find_by_id(tx.user_id).await?;
                customers.insert(
                    tx.user_id,
                    user.map(|u| (u.phone_number, u.full_name))
                        .unwrap_or((None, String::new())),
                );
            }
        }

        Ok(summarize_customers(&at_restaurant, |user_id| {
            customers
                .get(&user_id)
                .cloned()
                .unwrap_or((None, String::new()))
        }))
    }
}
