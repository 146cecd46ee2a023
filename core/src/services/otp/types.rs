//! Result types for OTP operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::OtpError;

/// A freshly issued code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedOtp {
    /// Phone number the code was issued for
    pub phone_number: String,
    /// Plaintext code, also handed to the delivery channel
    pub code: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Flattened verification outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeResult {
    /// Whether verification succeeded
    pub success: bool,
    /// Human-readable reason
    pub message: String,
}

impl VerifyCodeResult {
    pub fn success() -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
        }
    }
}

impl From<OtpError> for VerifyCodeResult {
    fn from(error: OtpError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
        }
    }
}
