//! Error type definitions for OTP, authentication, token and validation
//! failures. Display strings are the user-facing messages.

use thiserror::Error;

/// Why an OTP request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitReason {
    /// Another code was issued inside the resend interval
    TooSoon,
    /// The hourly quota for the phone is used up
    QuotaExceeded,
}

impl RateLimitReason {
    pub fn message(&self) -> &'static str {
        match self {
            RateLimitReason::TooSoon => "Please wait before requesting another OTP",
            RateLimitReason::QuotaExceeded => "Too many OTP requests. Please try again later.",
        }
    }
}

/// Outcomes of issuing or verifying a one-time code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    #[error("{}", .reason.message())]
    RateLimited { reason: RateLimitReason },

    #[error("OTP expired or invalid")]
    NotFound,

    #[error("Too many attempts")]
    TooManyAttempts,

    #[error("Invalid code")]
    InvalidCode,
}

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User account is disabled")]
    AccountDisabled,

    #[error("Not a restaurant admin")]
    NotRestaurantAdmin,

    #[error("No restaurant associated")]
    NoRestaurantAssociated,

    #[error("Cashier account is disabled")]
    CashierDisabled,

    #[error("Invalid PIN")]
    InvalidPin,

    #[error("Authentication credentials were not provided")]
    MissingCredentials,

    #[error("You do not have permission to perform this action")]
    InsufficientPermissions,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token not yet valid")]
    TokenNotYetValid,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Wrong token type")]
    WrongTokenType,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    #[error("Out of range: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid action")]
    InvalidAction { action: String },

    #[error("Duplicate value: {field}")]
    DuplicateValue { field: String },
}
