//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    likes: Arc<RwLock<HashMap<Uuid, Vec<Uuid>>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.phone_number.as_deref() == Some(phone_number))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if let Some(phone) = user.phone_number.as_deref() {
            if users.values().any(|u| u.phone_number.as_deref() == Some(phone)) {
                return Err(DomainError::Conflict {
                    message: "Phone number already registered".to_string(),
                });
            }
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn liked_restaurant_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let likes = self.likes.read().await;
        Ok(likes.get(&user_id).cloned().unwrap_or_default())
    }

    async fn add_liked_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut likes = self.likes.write().await;
        let liked = likes.entry(user_id).or_default();
        if !liked.contains(&restaurant_id) {
            liked.push(restaurant_id);
        }
        Ok(())
    }

    async fn remove_liked_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut likes = self.likes.write().await;
        if let Some(liked) = likes.get_mut(&user_id) {
            liked.retain(|id| *id != restaurant_id);
        }
        Ok(())
    }
}
