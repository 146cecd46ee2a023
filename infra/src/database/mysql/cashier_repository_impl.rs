//! MySQL implementation of the CashierRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cg_core::domain::entities::cashier::Cashier;
use cg_core::errors::DomainError;
use cg_core::repositories::CashierRepository;

use super::{column, query_failed, uuid_column, write_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT id, restaurant_id, name, phone_number, pin_hash, is_active, created_at, updated_at
    FROM cashiers
"#;

const DUPLICATE: &str = "Cashier with this phone number at this restaurant";

pub struct MySqlCashierRepository {
    pool: MySqlPool,
}

impl MySqlCashierRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_cashier(row: &MySqlRow) -> Result<Cashier, DomainError> {
        Ok(Cashier {
            id: uuid_column(row, "id")?,
            restaurant_id: uuid_column(row, "restaurant_id")?,
            name: column(row, "name")?,
            phone_number: column(row, "phone_number")?,
            pin_hash: column(row, "pin_hash")?,
            is_active: column(row, "is_active")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl CashierRepository for MySqlCashierRepository {
    async fn create(&self, cashier: Cashier) -> Result<Cashier, DomainError> {
        let query = r#"
            INSERT INTO cashiers (
                id, restaurant_id, name, phone_number, pin_hash, is_active, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(cashier.id.to_string())
            .bind(cashier.restaurant_id.to_string())
            .bind(&cashier.name)
            .bind(&cashier.phone_number)
            .bind(&cashier.pin_hash)
            .bind(cashier.is_active)
            .bind(cashier.created_at)
            .bind(cashier.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| write_failed("Failed to create cashier", DUPLICATE, e))?;

        Ok(cashier)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cashier>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to load cashier", e))?;

        row.as_ref().map(Self::row_to_cashier).transpose()
    }

    async fn find_by_restaurant_and_phone(
        &self,
        restaurant_id: Uuid,
        phone_number: &str,
    ) -> Result<Option<Cashier>, DomainError> {
        let query = format!(
            "{} WHERE restaurant_id = ? AND phone_number = ? LIMIT 1",
            SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(restaurant_id.to_string())
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to load cashier by phone", e))?;

        row.as_ref().map(Self::row_to_cashier).transpose()
    }

    async fn list_by_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<Cashier>, DomainError> {
        let query = format!("{} WHERE restaurant_id = ? ORDER BY created_at", SELECT_COLUMNS);

        let rows = sqlx::query(&query)
            .bind(restaurant_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to list cashiers", e))?;

        rows.iter().map(Self::row_to_cashier).collect()
    }

    async fn update(&self, cashier: Cashier) -> Result<Cashier, DomainError> {
        let query = r#"
            UPDATE cashiers
            SET name = ?, phone_number = ?, pin_hash = ?, is_active = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&cashier.name)
            .bind(&cashier.phone_number)
            .bind(&cashier.pin_hash)
            .bind(cashier.is_active)
            .bind(cashier.updated_at)
            .bind(cashier.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| write_failed("Failed to update cashier", DUPLICATE, e))?;

        if result.rows_affected() == 0 && self.find_by_id(cashier.id).await?.is_none() {
            return Err(DomainError::not_found("Cashier"));
        }

        Ok(cashier)
    }
}
