//! Table booking entity.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation made by a user; `id` is assigned by storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBooking {
    #[serde(rename = "BTID")]
    pub id: u64,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub customer_phone_number: String,
    pub number_of_people: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking fields supplied by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub restaurant_id: Uuid,
    pub customer_phone_number: String,
    pub number_of_people: u32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub comment: Option<String>,
}

impl NewBooking {
    /// Attaches the owner and timestamps; `id` stays 0 until stored
    pub fn into_booking(self, user_id: Uuid) -> TableBooking {
        let now = Utc::now();
        TableBooking {
            id: 0,
            user_id,
            restaurant_id: self.restaurant_id,
            customer_phone_number: self.customer_phone_number,
            number_of_people: self.number_of_people,
            date: self.date,
            time: self.time,
            comment: self.comment.filter(|c| !c.trim().is_empty()),
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_comment_is_dropped() {
        let booking = NewBooking {
            restaurant_id: Uuid::new_v4(),
            customer_phone_number: "+998901234567".to_string(),
            number_of_people: 4,
            date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
            time: NaiveTime::from_hms_opt(19, 30, 0).unwrap(),
            comment: Some("   ".to_string()),
        }
        .into_booking(Uuid::new_v4());

        assert_eq!(booking.id, 0);
        assert!(booking.comment.is_none());
    }

    #[test]
    fn test_id_serializes_as_btid() {
        let booking = NewBooking {
            restaurant_id: Uuid::new_v4(),
            customer_phone_number: "+998901234567".to_string(),
            number_of_people: 2,
            date: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            comment: None,
        }
        .into_booking(Uuid::new_v4());

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["BTID"], serde_json::json!(0));
        assert_eq!(json["time"], serde_json::json!("12:00:00"));
    }
}
