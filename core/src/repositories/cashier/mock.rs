//! In-memory implementation of CashierRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::cashier::Cashier;
use crate::errors::DomainError;

use super::trait_::CashierRepository;

/// Mock cashier repository for testing
#[derive(Clone, Default)]
pub struct MockCashierRepository {
    cashiers: Arc<RwLock<HashMap<Uuid, Cashier>>>,
}

impl MockCashierRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn phone_taken(cashiers: &HashMap<Uuid, Cashier>, candidate: &Cashier) -> bool {
    cashiers.values().any(|c| {
        c.id != candidate.id
            && c.restaurant_id == candidate.restaurant_id
            && c.phone_number == candidate.phone_number
    })
}

#[async_trait]
impl CashierRepository for MockCashierRepository {
    async fn create(&self, cashier: Cashier) -> Result<Cashier, DomainError> {
        let mut cashiers = self.cashiers.write().await;
        if phone_taken(&cashiers, &cashier) {
            return Err(DomainError::Conflict {
                message: "Cashier with this phone number already exists".to_string(),
            });
        }
        cashiers.insert(cashier.id, cashier.clone());
        Ok(cashier)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cashier>, DomainError> {
        Ok(self.cashiers.read().await.get(&id).cloned())
    }

    async fn find_by_restaurant_and_phone(
        &self,
        restaurant_id: Uuid,
        phone_number: &str,
    ) -> Result<Option<Cashier>, DomainError> {
        let cashiers = self.cashiers.read().await;
        Ok(cashiers
            .values()
            .find(|c| c.restaurant_id == restaurant_id && c.phone_number == phone_number)
            .cloned())
    }

    async fn list_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Cashier>, DomainError> {
        let cashiers = self.cashiers.read().await;
        let mut list: Vec<Cashier> = cashiers
            .values()
            .filter(|c| c.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        list.sort_by_key(|c| c.created_at);
        Ok(list)
    }

    async fn update(&self, cashier: Cashier) -> Result<Cashier, DomainError> {
        let mut cashiers = self.cashiers.write().await;
        if !cashiers.contains_key(&cashier.id) {
            return Err(DomainError::not_found("Cashier"));
        }
        if phone_taken(&cashiers, &cashier) {
            return Err(DomainError::Conflict {
                message: "Cashier with this phone number already exists".to_string(),
            });
        }
        cashiers.insert(cashier.id, cashier.clone());
        Ok(cashier)
    }
}
