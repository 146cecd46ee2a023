//! Table booking repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::TableBooking;
use crate::errors::DomainError;

/// Repository trait for table bookings
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a booking; the returned copy carries the assigned `id`
    async fn create(&self, booking: TableBooking) -> Result<TableBooking, DomainError>;

    /// Bookings made by a user, newest first
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<TableBooking>, DomainError>;
}
