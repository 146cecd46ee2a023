//! Cashier entity: restaurant staff who sign in with a numeric PIN.

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of digits in a cashier PIN
pub const DEFAULT_PIN_LENGTH: usize = 4;

/// Maximum length of a cashier's display name
pub const MAX_CASHIER_NAME_LENGTH: usize = 255;

/// Cashier working at one restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cashier {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    /// Unique within the restaurant
    pub phone_number: String,
    #[serde(skip_serializing)]
    pub pin_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cashier {
    /// Creates an active cashier with an already hashed PIN
    pub fn new(restaurant_id: Uuid, name: String, phone_number: String, pin_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            restaurant_id,
            name,
            phone_number,
            pin_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Draws `length` independent random digits; leading zeros are kept
    pub fn generate_pin(length: usize) -> String {
        let mut rng = OsRng;
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

/// Partial update of a cashier from the admin panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashierPatch {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: Option<bool>,
}

impl CashierPatch {
    pub fn apply(self, cashier: &mut Cashier) {
        if let Some(name) = self.name {
            cashier.name = name;
        }
        if let Some(phone_number) = self.phone_number {
            cashier.phone_number = phone_number;
        }
        if let Some(is_active) = self.is_active {
            cashier.is_active = is_active;
        }
        cashier.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pin_digits() {
        for _ in 0..200 {
            let pin = Cashier::generate_pin(DEFAULT_PIN_LENGTH);
            assert_eq!(pin.len(), 4);
            assert!(pin.chars().all(|c| c.is_ascii_digit()));
        }
        assert_eq!(Cashier::generate_pin(6).len(), 6);
    }

    #[test]
    fn test_patch_deactivates() {
        let mut cashier = Cashier::new(
            Uuid::new_v4(),
            "Dilnoza".to_string(),
            "+998901112233".to_string(),
            "hash".to_string(),
        );

        CashierPatch {
            is_active: Some(false),
            ..Default::default()
        }
        .apply(&mut cashier);

        assert!(!cashier.is_active);
        assert_eq!(cashier.name, "Dilnoza");
    }
}
