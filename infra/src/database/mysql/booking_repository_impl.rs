//! MySQL implementation of the BookingRepository trait.
//!
//! Booking ids come from the `AUTO_INCREMENT` column.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cg_core::domain::entities::booking::TableBooking;
use cg_core::errors::DomainError;
use cg_core::repositories::BookingRepository;

use super::{column, query_failed, uuid_column};

pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &MySqlRow) -> Result<TableBooking, DomainError> {
        Ok(TableBooking {
            id: column(row, "id")?,
            user_id: uuid_column(row, "user_id")?,
            restaurant_id: uuid_column(row, "restaurant_id")?,
            customer_phone_number: column(row, "customer_phone_number")?,
            number_of_people: column(row, "number_of_people")?,
            date: column(row, "date")?,
            time: column(row, "time")?,
            comment: column(row, "comment")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, mut booking: TableBooking) -> Result<TableBooking, DomainError> {
        let query = r#"
            INSERT INTO table_bookings (
                user_id, restaurant_id, customer_phone_number, number_of_people,
                date, time, comment, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(booking.user_id.to_string())
            .bind(booking.restaurant_id.to_string())
            .bind(&booking.customer_phone_number)
            .bind(booking.number_of_people)
            .bind(booking.date)
            .bind(booking.time)
            .bind(&booking.comment)
            .bind(booking.created_at)
            .bind(booking.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to create booking", e))?;

        booking.id = result.last_insert_id();
        tracing::info!(booking_id = booking.id, restaurant_id = %booking.restaurant_id, "Table booked");

        Ok(booking)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TableBooking>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, restaurant_id, customer_phone_number, number_of_people,
                   date, time, comment, created_at, updated_at
            FROM table_bookings
            WHERE user_id = ?
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to list bookings", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }
}
