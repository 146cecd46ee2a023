//! In-memory implementation of BookingRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::TableBooking;
use crate::errors::DomainError;

use super::trait_::BookingRepository;

/// Mock booking repository; ids are assigned sequentially from 1
#[derive(Clone, Default)]
pub struct MockBookingRepository {
    bookings: Arc<RwLock<Vec<TableBooking>>>,
}

impl MockBookingRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, mut booking: TableBooking) -> Result<TableBooking, DomainError> {
        let mut bookings = self.bookings.write().await;
        booking.id = bookings.len() as u64 + 1;
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TableBooking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .rev()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }
}
