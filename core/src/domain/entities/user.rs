//! User entity representing a registered customer or staff member.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a user's full name
pub const MAX_FULL_NAME_LENGTH: usize = 255;

/// User entity
///
/// Customers sign in with a phone OTP and never have a password; restaurant
/// admins and superusers carry a bcrypt `password_hash`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Login phone number, unique when present
    pub phone_number: Option<String>,

    /// Optional contact email
    pub email: Option<String>,

    /// Display name, empty until the user sets it
    pub full_name: String,

    /// bcrypt hash for password logins
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,

    /// Inactive users cannot sign in
    pub is_active: bool,

    /// Staff flag
    pub is_staff: bool,

    /// Superusers pass every restaurant-admin permission check
    pub is_superuser: bool,

    /// Timestamp when the user registered
    pub date_joined: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a customer identified by phone number
    pub fn new_customer(phone_number: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone_number: Some(phone_number),
            email: None,
            full_name: String::new(),
            password_hash: None,
            is_active: true,
            is_staff: false,
            is_superuser: false,
            date_joined: now,
            updated_at: now,
        }
    }

    /// Replaces the display name
    pub fn rename(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
        self.updated_at = Utc::now();
    }

    /// Whether the user can sign in with a password
    pub fn has_password(&self) -> bool {
        self.password_hash.is_some()
    }
}
