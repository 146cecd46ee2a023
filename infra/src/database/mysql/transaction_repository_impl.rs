//! MySQL implementation of the TransactionRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cg_core::domain::entities::transaction::{CustomerSummary, Transaction, TransactionView};
use cg_core::errors::DomainError;
use cg_core::repositories::TransactionRepository;
use cg_shared::types::Pagination;

use super::{column, optional_uuid_column, query_failed, uuid_column, write_failed};

pub struct MySqlTransactionRepository {
    pool: MySqlPool,
}

impl MySqlTransactionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_transaction(row: &MySqlRow) -> Result<Transaction, DomainError> {
        Ok(Transaction {
            id: uuid_column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            restaurant_id: uuid_column(row, "restaurant_id")?,
            cashier_id: optional_uuid_column(row, "cashier_id")?,
            sum_before_discount: column(row, "sum_before_discount")?,
            discount_percentage: column(row, "discount_percentage")?,
            sum_after_discount: column(row, "sum_after_discount")?,
            discount_amount_uzs: column(row, "discount_amount_uzs")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    fn row_to_summary(row: &MySqlRow) -> Result<CustomerSummary, DomainError> {
        let total_transactions: i64 = column(row, "total_transactions")?;
        let total_before_discount: Option<Decimal> = column(row, "total_before_discount")?;
        let total_discount: Option<Decimal> = column(row, "total_discount")?;
        let total_after_discount: Option<Decimal> = column(row, "total_after_discount")?;
        let last_transaction_date: Option<DateTime<Utc>> = column(row, "last_transaction_date")?;

        Ok(CustomerSummary {
            user_id: uuid_column(row, "user_id")?,
            phone_number: column(row, "phone_number")?,
            full_name: column(row, "full_name")?,
            total_transactions: u64::try_from(total_transactions).unwrap_or(0),
            total_before_discount: total_before_discount.unwrap_or_default(),
            total_discount: total_discount.unwrap_or_default(),
            total_after_discount: total_after_discount.unwrap_or_default(),
            last_transaction_date,
        })
    }
}

#[async_trait]
impl TransactionRepository for MySqlTransactionRepository {
    async fn create(&self, transaction: Transaction) -> Result<Transaction, DomainError> {
        let query = r#"
            INSERT INTO transactions (
                id, user_id, restaurant_id, cashier_id, sum_before_discount,
                discount_percentage, sum_after_discount, discount_amount_uzs,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(transaction.id.to_string())
            .bind(transaction.user_id.to_string())
            .bind(transaction.restaurant_id.to_string())
            .bind(transaction.cashier_id.map(|id| id.to_string()))
            .bind(transaction.sum_before_discount)
            .bind(transaction.discount_percentage)
            .bind(transaction.sum_after_discount)
            .bind(transaction.discount_amount_uzs)
            .bind(transaction.created_at)
            .bind(transaction.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| write_failed("Failed to record transaction", "Transaction", e))?;

        Ok(transaction)
    }

    async fn list_by_user(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<(Vec<TransactionView>, u64), DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to count transactions", e))?;

        let rows = sqlx::query(
            r#"
            SELECT t.id, t.user_id, t.restaurant_id, t.cashier_id, t.sum_before_discount,
                   t.discount_percentage, t.sum_after_discount, t.discount_amount_uzs,
                   t.created_at, t.updated_at, r.name AS restaurant_name
            FROM transactions t
            JOIN restaurants r ON r.id = t.restaurant_id
            WHERE t.user_id = ?
            ORDER BY t.created_at DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(user_id.to_string())
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to list transactions", e))?;

        let views = rows
            .iter()
            .map(|row| {
                Ok(TransactionView {
                    transaction: Self::row_to_transaction(row)?,
                    restaurant_name: column(row, "restaurant_name")?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok((views, u64::try_from(count).unwrap_or(0)))
    }

    async fn customer_summaries(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<CustomerSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT u.id AS user_id, u.phone_number, u.full_name,
                   COUNT(t.id) AS total_transactions,
                   SUM(t.sum_before_discount) AS total_before_discount,
                   SUM(t.discount_amount_uzs) AS total_discount,
                   SUM(t.sum_after_discount) AS total_after_discount,
                   MAX(t.created_at) AS last_transaction_date
            FROM transactions t
            JOIN users u ON u.id = t.user_id
            WHERE t.restaurant_id = ?
            GROUP BY u.id, u.phone_number, u.full_name
            ORDER BY last_transaction_date DESC
            "#,
        )
        .bind(restaurant_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to summarize customers", e))?;

        rows.iter().map(Self::row_to_summary).collect()
    }
}
