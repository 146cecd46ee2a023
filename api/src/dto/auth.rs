use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cg_core::domain::entities::token::TokenPair;
use cg_core::domain::entities::user::User;
use cg_core::domain::value_objects::{AdminAuthResponse, AuthResponse, CashierAuthResponse, CashierProfile};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestOtpRequest {
    /// Free-form phone number, normalized by the OTP service
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "phone_number is required"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 6))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1))]
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, max = 20))]
    pub phone_number: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CashierLoginRequest {
    pub restaurant_id: Uuid,

    #[validate(length(min = 1, max = 20))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 10))]
    pub pin_code: String,
}

/// Public part of a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub phone_number: Option<String>,
    pub full_name: String,
    pub date_joined: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone_number: user.phone_number,
            full_name: user.full_name,
            date_joined: user.date_joined,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub user: UserSummary,
    pub access: String,
    pub refresh: String,
    pub is_new_user: bool,
}

impl From<AuthResponse> for VerifyOtpResponse {
    fn from(response: AuthResponse) -> Self {
        let TokenPair { access, refresh, .. } = response.tokens;
        Self {
            user: response.user.into(),
            access,
            refresh,
            is_new_user: response.is_new_user,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub user: UserSummary,
    pub access: String,
    pub refresh: String,
    pub restaurant_id: Option<Uuid>,
    pub restaurant_name: Option<String>,
}

impl From<AdminAuthResponse> for AdminLoginResponse {
    fn from(response: AdminAuthResponse) -> Self {
        let TokenPair { access, refresh, .. } = response.tokens;
        Self {
            user: response.user.into(),
            access,
            refresh,
            restaurant_id: response.restaurant_id,
            restaurant_name: response.restaurant_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashierLoginResponse {
    pub cashier: CashierProfile,
    pub access: String,
    pub refresh: String,
}

impl From<CashierAuthResponse> for CashierLoginResponse {
    fn from(response: CashierAuthResponse) -> Self {
        let TokenPair { access, refresh, .. } = response.tokens;
        Self {
            cashier: response.cashier,
            access,
            refresh,
        }
    }
}
