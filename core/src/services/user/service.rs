//! Profile operations for signed-in customers

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::{User, MAX_FULL_NAME_LENGTH};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{RestaurantRepository, UserRepository};

use super::types::{LikeAction, LikeResult, UserProfile};

pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
    restaurant_repository: Arc<dyn RestaurantRepository>,
}

impl UserService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        restaurant_repository: Arc<dyn RestaurantRepository>,
    ) -> Self {
        Self {
            user_repository,
            restaurant_repository,
        }
    }

    /// Load an active user, used by request authentication
    pub async fn active_user(&self, user_id: Uuid) -> DomainResult<User> {
        match self.user_repository.find_by_id(user_id).await? {
            Some(user) if user.is_active => Ok(user),
            _ => Err(DomainError::not_found("User")),
        }
    }

    /// Profile with liked restaurant ids
    pub async fn profile(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        let user = self.active_user(user_id).await?;
        let liked_restaurants = self.user_repository.liked_restaurant_ids(user.id).await?;
        Ok(UserProfile {
            user,
            liked_restaurants,
        })
    }

    /// Replace the display name; `None` leaves the profile unchanged
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        full_name: Option<String>,
    ) -> DomainResult<UserProfile> {
        if let Some(full_name) = full_name {
            let full_name = full_name.trim().to_string();
            if full_name.chars().count() > MAX_FULL_NAME_LENGTH {
                return Err(ValidationError::TooLong {
                    field: "full_name".to_string(),
                    max: MAX_FULL_NAME_LENGTH,
                }
                .into());
            }

            let mut user = self.active_user(user_id).await?;
            user.rename(full_name);
            self.user_repository.update(user).await?;
            tracing::info!(user_id = %user_id, event = "profile_updated", "Profile updated");
        }

        self.profile(user_id).await
    }

    /// Add or remove a restaurant from the user's likes
    ///
    /// The restaurant is looked up before the action is parsed, so an unknown
    /// restaurant is reported even for an invalid action.
    pub async fn like_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
        action: &str,
    ) -> DomainResult<LikeResult> {
        let restaurant = self
            .restaurant_repository
            .find_by_id(restaurant_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Restaurant"))?;

        let message = match action.parse::<LikeAction>()? {
            LikeAction::Add => {
                self.user_repository
                    .add_liked_restaurant(user_id, restaurant.id)
                    .await?;
                format!("Added {} to liked restaurants", restaurant.name)
            }
            LikeAction::Remove => {
                self.user_repository
                    .remove_liked_restaurant(user_id, restaurant.id)
                    .await?;
                format!("Removed {} from liked restaurants", restaurant.name)
            }
        };

        Ok(LikeResult {
            status: "ok".to_string(),
            message,
            liked_restaurants: self.user_repository.liked_restaurant_ids(user_id).await?,
        })
    }
}
