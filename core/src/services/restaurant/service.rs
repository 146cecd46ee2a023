//! Restaurant listing and detail

use std::sync::Arc;
use uuid::Uuid;

use cg_shared::utils::search::search_terms;

use crate::domain::entities::restaurant::{Restaurant, RestaurantDetail};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RestaurantRepository;

pub struct RestaurantService {
    repository: Arc<dyn RestaurantRepository>,
}

impl RestaurantService {
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }

    /// All restaurants ordered by name, narrowed by an optional search query
    ///
    /// The query is split on whitespace and commas; every term has to occur
    /// in the name, hashtags or description.
    pub async fn list(&self, search: Option<&str>) -> DomainResult<Vec<Restaurant>> {
        let terms = search.map(search_terms).unwrap_or_default();
        self.repository.list(&terms).await
    }

    /// Restaurant with its gallery and ordered menu pages
    pub async fn detail(&self, id: Uuid) -> DomainResult<RestaurantDetail> {
        let restaurant = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Restaurant"))?;

        Ok(RestaurantDetail {
            gallery: self.repository.gallery(restaurant.id).await?,
            menu_images: self.repository.menu_images(restaurant.id).await?,
            restaurant,
        })
    }
}
