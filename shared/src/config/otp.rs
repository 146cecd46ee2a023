//! One-time password configuration
//!
//! Request limits are derived from stored OTP rows at request time, so the
//! values here only describe the windows and thresholds used by the queries.

use serde::{Deserialize, Serialize};

use super::env_or;

/// OTP lifetime, resend interval and per-phone quotas
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes a code stays valid after creation
    pub expiry_minutes: i64,

    /// Minimum seconds between two codes for the same phone
    pub resend_interval_seconds: i64,

    /// Maximum codes per phone inside `quota_window_minutes`
    pub max_requests_per_hour: u32,

    /// Trailing window for `max_requests_per_hour`
    pub quota_window_minutes: i64,

    /// Wrong submissions allowed before a code is locked
    pub max_attempts: u32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: 5,
            resend_interval_seconds: 60,
            max_requests_per_hour: 5,
            quota_window_minutes: 60,
            max_attempts: 3,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            expiry_minutes: env_or("OTP_EXPIRY_MINUTES", defaults.expiry_minutes),
            resend_interval_seconds: env_or(
                "OTP_RESEND_INTERVAL_SECONDS",
                defaults.resend_interval_seconds,
            ),
            max_requests_per_hour: env_or("OTP_MAX_PER_HOUR", defaults.max_requests_per_hour),
            quota_window_minutes: defaults.quota_window_minutes,
            max_attempts: env_or("OTP_MAX_ATTEMPTS", defaults.max_attempts),
        }
    }

    /// Set the per-window request quota
    pub fn with_max_requests_per_hour(mut self, max: u32) -> Self {
        self.max_requests_per_hour = max;
        self
    }

    /// Set the resend interval
    pub fn with_resend_interval_seconds(mut self, seconds: i64) -> Self {
        self.resend_interval_seconds = seconds;
        self
    }
}
