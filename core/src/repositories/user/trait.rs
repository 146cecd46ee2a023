//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and returns `DomainError` for storage failures so
//! services never see driver-specific errors.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their login phone number
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this phone
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Errors
    /// * `DomainError::Conflict` - The phone number is already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No user with this id
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Restaurants the user has liked, oldest like first
    async fn liked_restaurant_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError>;

    /// Add a like; adding an existing like is a no-op
    async fn add_liked_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<(), DomainError>;

    /// Remove a like; removing a missing like is a no-op
    async fn remove_liked_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<(), DomainError>;
}
