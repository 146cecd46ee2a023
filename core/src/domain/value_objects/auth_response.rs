//! Results returned by the login flows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;

/// Result of a successful phone OTP login
///
/// `is_new_user` tells the client to show onboarding (name entry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: User,
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub is_new_user: bool,
}

/// Result of a restaurant admin password login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminAuthResponse {
    pub user: User,
    #[serde(flatten)]
    pub tokens: TokenPair,
    /// `None` for superusers without a restaurant of their own
    pub restaurant_id: Option<Uuid>,
    pub restaurant_name: Option<String>,
}

/// Cashier identity echoed back after a PIN login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashierProfile {
    pub id: Uuid,
    pub name: String,
    pub restaurant_id: Uuid,
    pub restaurant_name: String,
}

/// Result of a cashier PIN login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashierAuthResponse {
    #[serde(flatten)]
    pub tokens: TokenPair,
    pub cashier: CashierProfile,
}
