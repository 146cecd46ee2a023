use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cg_core::domain::entities::booking::NewBooking;
use cg_core::domain::entities::restaurant::Restaurant;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantListQuery {
    pub search: Option<String>,
}

/// Card shown in the restaurant list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantListItem {
    pub id: Uuid,
    pub name: String,
    pub logo: Option<String>,
    pub hashtags: String,
    pub location_text: String,
    pub discount_percentage: Decimal,
}

impl From<Restaurant> for RestaurantListItem {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            logo: restaurant.logo,
            hashtags: restaurant.hashtags,
            location_text: restaurant.location_text,
            discount_percentage: restaurant.discount_percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BookTableRequest {
    #[serde(alias = "restaurant")]
    pub restaurant_id: Uuid,

    #[validate(length(min = 1, max = 20))]
    pub customer_phone_number: String,

    #[validate(range(min = 1))]
    pub number_of_people: u32,

    pub date: NaiveDate,

    pub time: NaiveTime,

    #[serde(default)]
    pub comment: Option<String>,
}

impl From<BookTableRequest> for NewBooking {
    fn from(request: BookTableRequest) -> Self {
        NewBooking {
            restaurant_id: request.restaurant_id,
            customer_phone_number: request.customer_phone_number,
            number_of_people: request.number_of_people,
            date: request.date,
            time: request.time,
            comment: request.comment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTransactionRequest {
    pub user_id: Uuid,
    pub sum_before_discount: Decimal,
}
