//! Booking a table and listing a user's bookings

use std::sync::Arc;
use uuid::Uuid;

use cg_shared::utils::phone::MAX_PHONE_LENGTH;

use crate::domain::entities::booking::{NewBooking, TableBooking};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{BookingRepository, RestaurantRepository};
use crate::services::validation::required_text;

pub struct BookingService {
    booking_repository: Arc<dyn BookingRepository>,
    restaurant_repository: Arc<dyn RestaurantRepository>,
}

impl BookingService {
    pub fn new(
        booking_repository: Arc<dyn BookingRepository>,
        restaurant_repository: Arc<dyn RestaurantRepository>,
    ) -> Self {
        Self {
            booking_repository,
            restaurant_repository,
        }
    }

    /// Book a table for the signed-in user
    ///
    /// An unknown restaurant is a validation failure of the request rather
    /// than a missing resource.
    pub async fn book(&self, user_id: Uuid, mut request: NewBooking) -> DomainResult<TableBooking> {
        request.customer_phone_number = required_text(
            "customer_phone_number",
            &request.customer_phone_number,
            MAX_PHONE_LENGTH,
        )?;
        if request.number_of_people < 1 {
            return Err(ValidationError::OutOfRange {
                field: "number_of_people".to_string(),
                min: "1".to_string(),
                max: u32::MAX.to_string(),
            }
            .into());
        }
        if self
            .restaurant_repository
            .find_by_id(request.restaurant_id)
            .await?
            .is_none()
        {
            return Err(DomainError::Validation {
                message: "Restaurant not found".to_string(),
            });
        }

        let booking = self
            .booking_repository
            .create(request.into_booking(user_id))
            .await?;

        tracing::info!(
            booking_id = booking.id,
            restaurant_id = %booking.restaurant_id,
            people = booking.number_of_people,
            event = "table_booked",
            "Table booked"
        );
        Ok(booking)
    }

    /// The user's bookings, newest first
    pub async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<TableBooking>> {
        self.booking_repository.list_by_user(user_id).await
    }
}
