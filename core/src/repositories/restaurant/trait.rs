//! Restaurant repository trait: listings, images and admin ownership.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::restaurant::{MenuImage, Restaurant, RestaurantImage};
use crate::errors::DomainError;

/// Repository trait for restaurants and their image collections
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Restaurants ordered by name.
    ///
    /// Every entry of `search_terms` (already lowercased) must occur in the
    /// name, hashtags or description. An empty slice returns everything.
    async fn list(&self, search_terms: &[String]) -> Result<Vec<Restaurant>, DomainError>;

    /// Find a restaurant by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, DomainError>;

    /// Insert a restaurant
    async fn create(&self, restaurant: Restaurant) -> Result<Restaurant, DomainError>;

    /// Overwrite the mutable fields of a restaurant
    async fn update(&self, restaurant: Restaurant) -> Result<Restaurant, DomainError>;

    /// Gallery images, oldest first
    async fn gallery(&self, restaurant_id: Uuid) -> Result<Vec<RestaurantImage>, DomainError>;

    /// Menu pages ordered by position
    async fn menu_images(&self, restaurant_id: Uuid) -> Result<Vec<MenuImage>, DomainError>;

    /// Append a gallery image
    async fn add_gallery_image(&self, image: RestaurantImage) -> Result<RestaurantImage, DomainError>;

    /// Restaurant managed by this user, if the user is a restaurant admin
    async fn find_by_admin(&self, user_id: Uuid) -> Result<Option<Restaurant>, DomainError>;

    /// Make `user_id` the admin of `restaurant_id`, replacing any previous link
    async fn assign_admin(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<(), DomainError>;
}
