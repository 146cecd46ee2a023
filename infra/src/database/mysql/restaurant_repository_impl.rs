//! MySQL implementation of the RestaurantRepository trait.
//!
//! Search runs in SQL: each term becomes a `LIKE` group over name, hashtags
//! and description, and all groups must match.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::types::Json;
use sqlx::{MySql, MySqlPool, QueryBuilder};
use uuid::Uuid;

use cg_core::domain::entities::restaurant::{MenuImage, Restaurant, RestaurantImage};
use cg_core::errors::DomainError;
use cg_core::repositories::RestaurantRepository;

use super::{column, query_failed, uuid_column, write_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT r.id, r.name, r.logo, r.description, r.hashtags, r.working_hours,
           r.contact_information, r.social_media, r.menu, r.location_text,
           r.discount_percentage, r.created_at, r.updated_at
    FROM restaurants r
"#;

/// MySQL implementation of RestaurantRepository
pub struct MySqlRestaurantRepository {
    pool: MySqlPool,
}

impl MySqlRestaurantRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_restaurant(row: &MySqlRow) -> Result<Restaurant, DomainError> {
        let social_media: Json<serde_json::Value> = column(row, "social_media")?;
        let menu: Json<serde_json::Value> = column(row, "menu")?;

        Ok(Restaurant {
            id: uuid_column(row, "id")?,
            name: column(row, "name")?,
            logo: column(row, "logo")?,
            description: column(row, "description")?,
            hashtags: column(row, "hashtags")?,
            working_hours: column(row, "working_hours")?,
            contact_information: column(row, "contact_information")?,
            social_media: social_media.0,
            menu: menu.0,
            location_text: column(row, "location_text")?,
            discount_percentage: column(row, "discount_percentage")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn row_to_image(row: &MySqlRow) -> Result<RestaurantImage, DomainError> {
        Ok(RestaurantImage {
            id: uuid_column(row, "id")?,
            restaurant_id: uuid_column(row, "restaurant_id")?,
            image: column(row, "image")?,
            created_at: column(row, "created_at")?,
        })
    }

    fn row_to_menu_image(row: &MySqlRow) -> Result<MenuImage, DomainError> {
        Ok(MenuImage {
            id: uuid_column(row, "id")?,
            restaurant_id: uuid_column(row, "restaurant_id")?,
            image: column(row, "image")?,
            position: column(row, "position")?,
        })
    }

    async fn fetch_one_where(
        &self,
        clause: &str,
        value: String,
        context: &str,
    ) -> Result<Option<Restaurant>, DomainError> {
        let query = format!("{} {} LIMIT 1", SELECT_COLUMNS, clause);
        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed(context, e))?;

        row.as_ref().map(Self::row_to_restaurant).transpose()
    }
}

/// Escape `LIKE` wildcards so a term only matches literally
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl RestaurantRepository for MySqlRestaurantRepository {
    async fn list(&self, search_terms: &[String]) -> Result<Vec<Restaurant>, DomainError> {
        let mut builder: QueryBuilder<MySql> = QueryBuilder::new(SELECT_COLUMNS);

        for (index, term) in search_terms.iter().enumerate() {
            builder.push(if index == 0 { " WHERE " } else { " AND " });
            let pattern = like_pattern(term);
            builder
                .push("(LOWER(r.name) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(r.hashtags) LIKE ")
                .push_bind(pattern.clone())
                .push(" OR LOWER(r.description) LIKE ")
                .push_bind(pattern)
                .push(")");
        }
        builder.push(" ORDER BY r.name");

        let rows = builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list restaurants", e))?;

        rows.iter().map(Self::row_to_restaurant).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Restaurant>, DomainError> {
        self.fetch_one_where("WHERE r.id = ?", id.to_string(), "Failed to load restaurant")
            .await
    }

    async fn create(&self, restaurant: Restaurant) -> Result<Restaurant, DomainError> {
        let query = r#"
            INSERT INTO restaurants (
                id, name, logo, description, hashtags, working_hours,
                contact_information, social_media, menu, location_text,
                discount_percentage, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(restaurant.id.to_string())
            .bind(&restaurant.name)
            .bind(&restaurant.logo)
            .bind(&restaurant.description)
            .bind(&restaurant.hashtags)
            .bind(&restaurant.working_hours)
            .bind(&restaurant.contact_information)
            .bind(Json(&restaurant.social_media))
            .bind(Json(&restaurant.menu))
            .bind(&restaurant.location_text)
            .bind(restaurant.discount_percentage)
            .bind(restaurant.created_at)
            .bind(restaurant.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| write_failed("Failed to create restaurant", "Restaurant", e))?;

        Ok(restaurant)
    }

    async fn update(&self, restaurant: Restaurant) -> Result<Restaurant, DomainError> {
        let query = r#"
            UPDATE restaurants
            SET name = ?, logo = ?, description = ?, hashtags = ?, working_hours = ?,
                contact_information = ?, social_media = ?, menu = ?, location_text = ?,
                discount_percentage = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&restaurant.name)
            .bind(&restaurant.logo)
            .bind(&restaurant.description)
            .bind(&restaurant.hashtags)
            .bind(&restaurant.working_hours)
            .bind(&restaurant.contact_information)
            .bind(Json(&restaurant.social_media))
            .bind(Json(&restaurant.menu))
            .bind(&restaurant.location_text)
            .bind(restaurant.discount_percentage)
            .bind(restaurant.updated_at)
            .bind(restaurant.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to update restaurant", e))?;

        if result.rows_affected() == 0 && self.find_by_id(restaurant.id).await?.is_none() {
            return Err(DomainError::not_found("Restaurant"));
        }

        Ok(restaurant)
    }

    async fn gallery(&self, restaurant_id: Uuid) -> Result<Vec<RestaurantImage>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, restaurant_id, image, created_at FROM restaurant_images \
             WHERE restaurant_id = ? ORDER BY created_at",
        )
        .bind(restaurant_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to load gallery", e))?;

        rows.iter().map(Self::row_to_image).collect()
    }

    async fn menu_images(&self, restaurant_id: Uuid) -> Result<Vec<MenuImage>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, restaurant_id, image, position FROM menu_images \
             WHERE restaurant_id = ? ORDER BY position",
        )
        .bind(restaurant_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to load menu images", e))?;

        rows.iter().map(Self::row_to_menu_image).collect()
    }

    async fn add_gallery_image(&self, image: RestaurantImage) -> Result<RestaurantImage, DomainError> {
        sqlx::query(
            "INSERT INTO restaurant_images (id, restaurant_id, image, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(image.id.to_string())
        .bind(image.restaurant_id.to_string())
        .bind(&image.image)
        .bind(image.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to add gallery image", e))?;

        Ok(image)
    }

    async fn find_by_admin(&self, user_id: Uuid) -> Result<Option<Restaurant>, DomainError> {
        self.fetch_one_where(
            "JOIN restaurant_admins a ON a.restaurant_id = r.id WHERE a.user_id = ?",
            user_id.to_string(),
            "Failed to load admin restaurant",
        )
        .await
    }

    async fn assign_admin(&self, user_id: Uuid, restaurant_id: Uuid) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| query_failed("Failed to begin transaction", e))?;

        sqlx::query("DELETE FROM restaurant_admins WHERE user_id = ? OR restaurant_id = ?")
            .bind(user_id.to_string())
            .bind(restaurant_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| query_failed("Failed to clear admin link", e))?;

        sqlx::query("INSERT INTO restaurant_admins (user_id, restaurant_id) VALUES (?, ?)")
            .bind(user_id.to_string())
            .bind(restaurant_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| query_failed("Failed to assign admin", e))?;

        tx.commit()
            .await
            .map_err(|e| query_failed("Failed to commit admin link", e))?;

        tracing::info!(user_id = %user_id, restaurant_id = %restaurant_id, "Assigned restaurant admin");
        Ok(())
    }
}
