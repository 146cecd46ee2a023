//! Cashier repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::cashier::Cashier;
use crate::errors::DomainError;

/// Repository trait for restaurant cashiers
///
/// Phone numbers are unique per restaurant; `create` and `update` return
/// `DomainError::Conflict` when that would be violated.
#[async_trait]
pub trait CashierRepository: Send + Sync {
    /// Insert a cashier
    async fn create(&self, cashier: Cashier) -> Result<Cashier, DomainError>;

    /// Find a cashier by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cashier>, DomainError>;

    /// Find the cashier with this phone at this restaurant
    async fn find_by_restaurant_and_phone(
        &self,
        restaurant_id: Uuid,
        phone_number: &str,
    ) -> Result<Option<Cashier>, DomainError>;

    /// All cashiers of a restaurant, oldest first
    async fn list_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Cashier>, DomainError>;

    /// Overwrite a cashier's name, phone, PIN hash and active flag
    async fn update(&self, cashier: Cashier) -> Result<Cashier, DomainError>;
}
