//! In-memory implementation of RestaurantRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::restaurant::{MenuImage, Restaurant, RestaurantImage};
use crate::errors::DomainError;

use super::trait_::RestaurantRepository;

#[derive(Default)]
struct State {
    restaurants: HashMap<Uuid, Restaurant>,
    gallery: Vec<RestaurantImage>,
    menu_images: Vec<MenuImage>,
    admins: HashMap<Uuid, Uuid>,
}

/// Mock restaurant repository for testing
#[derive(Clone, Default)]
pub struct MockRestaurantRepository {
    state: Arc<RwLock<State>>,
}

impl MockRestaurantRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a menu page
    pub async fn add_menu_image(&self, restaurant_id: Uuid, image: &str, position: u32) -> MenuImage {
        let menu_image = MenuImage {
            id: Uuid::new_v4(),
            restaurant_id,
            image: image.to_string(),
            position,
        };
        self.state.write().await.menu_images.push(menu_image.clone());
        menu_image
    }
}

#[async_trait]
impl RestaurantRepository for MockRestaurantRepository {
    async fn list(&self, search_terms: &[String]) -> Result<Vec<Restaurant>, DomainError> {
        let state = self.state.read().await;
        let mut restaurants: Vec<Restaurant> = state
            .restaurants
            .values()
            .filter(|r| r.matches_search(search_terms))
            .cloned()
            .collect();
        restaurants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(restaurants)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, DomainError> {
        Ok(self.state.read().await.restaurants.get(&id).cloned())
    }

    async fn create(&self, restaurant: Restaurant) -> Result<Restaurant, DomainError> {
        let mut state = self.state.write().await;
        state.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn update(&self, restaurant: Restaurant) -> Result<Restaurant, DomainError> {
        let mut state = self.state.write().await;
        if !state.restaurants.contains_key(&restaurant.id) {
            return Err(DomainError::not_found("Restaurant"));
        }
        state.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn gallery(&self, restaurant_id: Uuid) -> Result<Vec<RestaurantImage>, DomainError> {
        let state = self.state.read().await;
        let mut images: Vec<RestaurantImage> = state
            .gallery
            .iter()
            .filter(|i| i.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        images.sort_by_key(|i| i.created_at);
        Ok(images)
    }

    async fn menu_images(&self, restaurant_id: Uuid) -> Result<Vec<MenuImage>, DomainError> {
        let state = self.state.read().await;
        let mut images: Vec<MenuImage> = state
            .menu_images
            .iter()
            .filter(|i| i.restaurant_id == restaurant_id)
            .cloned()
            .collect();
        images.sort_by_key(|i| i.position);
        Ok(images)
    }

    async fn add_gallery_image(&self, image: RestaurantImage) -> Result<RestaurantImage, DomainError> {
        let mut state = self.state.write().await;
        if !state.restaurants.contains_key(&image.restaurant_id) {
            return Err(DomainError::not_found("Restaurant"));
        }
        state.gallery.push(image.clone());
        Ok(image)
    }

    async fn find_by_admin(&self, user_id: Uuid) -> Result<Option<Restaurant>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .admins
            .get(&user_id)
            .and_then(|restaurant_id| state.restaurants.get(restaurant_id))
            .cloned())
    }

    async fn assign_admin(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        if !state.restaurants.contains_key(&restaurant_id) {
            return Err(DomainError::not_found("Restaurant"));
        }
        // one admin per restaurant
        state.admins.retain(|_, rid| *rid != restaurant_id);
        state.admins.insert(user_id, restaurant_id);
        Ok(())
    }
}
