//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cg_core::domain::entities::user::User;
use cg_core::errors::DomainError;
use cg_core::repositories::UserRepository;

use super::{column, query_failed, uuid_column, write_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT id, phone_number, email, full_name, password_hash,
           is_active, is_staff, is_superuser, date_joined, updated_at
    FROM users
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: uuid_column(row, "id")?,
            phone_number: column(row, "phone_number")?,
            email: column(row, "email")?,
            full_name: column(row, "full_name")?,
            password_hash: column(row, "password_hash")?,
            is_active: column(row, "is_active")?,
            is_staff: column(row, "is_staff")?,
            is_superuser: column(row, "is_superuser")?,
            date_joined: column(row, "date_joined")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to load user", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let query = format!("{} WHERE phone_number = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to load user by phone", e))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, phone_number, email, full_name, password_hash,
                is_active, is_staff, is_superuser, date_joined, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.phone_number)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.is_staff)
            .bind(user.is_superuser)
            .bind(user.date_joined)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| write_failed("Failed to create user", "User with this phone number", e))?;

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET phone_number = ?, email = ?, full_name = ?, password_hash = ?,
                is_active = ?, is_staff = ?, is_superuser = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.phone_number)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(&user.password_hash)
            .bind(user.is_active)
            .bind(user.is_staff)
            .bind(user.is_superuser)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| write_failed("Failed to update user", "User with this phone number", e))?;

        // MySQL reports changed rows, so an identical write can affect 0 rows
        if result.rows_affected() == 0 && self.find_by_id(user.id).await?.is_none() {
            return Err(DomainError::not_found("User"));
        }

        Ok(user)
    }

    async fn liked_restaurant_ids(&self, user_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let rows = sqlx::query(
            "SELECT restaurant_id FROM user_liked_restaurants WHERE user_id = ? ORDER BY created_at",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to load liked restaurants", e))?;

        rows.iter()
            .map(|row| uuid_column(row, "restaurant_id"))
            .collect()
    }

    async fn add_liked_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT IGNORE INTO user_liked_restaurants (user_id, restaurant_id, created_at) \
             VALUES (?, ?, ?)",
        )
        .bind(user_id.to_string())
        .bind(restaurant_id.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to add liked restaurant", e))?;

        Ok(())
    }

    async fn remove_liked_restaurant(
        &self,
        user_id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM user_liked_restaurants WHERE user_id = ? AND restaurant_id = ?")
            .bind(user_id.to_string())
            .bind(restaurant_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to remove liked restaurant", e))?;

        Ok(())
    }
}
