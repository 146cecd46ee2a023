//! One-time password record used for phone login.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of wrong submissions before a code is locked
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Smallest code that can be issued
pub const MIN_CODE: u32 = 100_000;

/// Largest code that can be issued
pub const MAX_CODE: u32 = 999_999;

/// Lifecycle state of an OTP record at a given instant
///
/// Derived from the stored fields; `Verified`, `Locked` and `Expired` are
/// terminal and a record never returns to `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpState {
    /// Unverified, unexpired and under the attempt cap
    Pending,
    /// Successfully verified
    Verified,
    /// Attempt cap reached
    Locked,
    /// Past its expiry timestamp
    Expired,
}

impl OtpState {
    /// Whether no further transition is possible
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OtpState::Pending)
    }
}

/// A code issued to a phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneOtp {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Phone number the code was issued for
    pub phone_number: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully verified
    pub is_verified: bool,

    /// Number of wrong submissions against this record
    pub attempt_count: u32,
}

impl PhoneOtp {
    /// Creates a new pending record with a random code
    pub fn new(phone_number: String, now: DateTime<Utc>, lifetime: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number,
            code: Self::generate_code(),
            created_at: now,
            expires_at: now + lifetime,
            is_verified: false,
            attempt_count: 0,
        }
    }

    /// Draws a code uniformly from `100000..=999999`
    pub fn generate_code() -> String {
        let code: u32 = rand::thread_rng().gen_range(MIN_CODE..=MAX_CODE);
        code.to_string()
    }

    /// Whether the expiry timestamp has passed at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Computes the lifecycle state at `now` with the given attempt cap
    pub fn state_at(&self, now: DateTime<Utc>, max_attempts: u32) -> OtpState {
        if self.is_verified {
            OtpState::Verified
        } else if self.is_expired_at(now) {
            OtpState::Expired
        } else if self.attempt_count >= max_attempts {
            OtpState::Locked
        } else {
            OtpState::Pending
        }
    }

    /// Compares a submitted code in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        constant_time_eq::constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Wrong submissions left before the record locks
    pub fn remaining_attempts(&self, max_attempts: u32) -> u32 {
        max_attempts.saturating_sub(self.attempt_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(now: DateTime<Utc>) -> PhoneOtp {
        PhoneOtp::new(
            "+998901234567".to_string(),
            now,
            Duration::minutes(DEFAULT_EXPIRATION_MINUTES),
        )
    }

    #[test]
    fn test_new_record_is_pending() {
        let now = Utc::now();
        let otp = record(now);

        assert_eq!(otp.attempt_count, 0);
        assert!(!otp.is_verified);
        assert_eq!(otp.expires_at - otp.created_at, Duration::minutes(5));
        assert_eq!(otp.state_at(now, MAX_ATTEMPTS), OtpState::Pending);
    }

    #[test]
    fn test_generate_code_range() {
        for _ in 0..500 {
            let code = PhoneOtp::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let value: u32 = code.parse().unwrap();
            assert!((MIN_CODE..=MAX_CODE).contains(&value));
        }
    }

    #[test]
    fn test_state_transitions() {
        let now = Utc::now();
        let mut otp = record(now);

        otp.attempt_count = MAX_ATTEMPTS;
        assert_eq!(otp.state_at(now, MAX_ATTEMPTS), OtpState::Locked);

        assert_eq!(
            otp.state_at(now + Duration::minutes(6), MAX_ATTEMPTS),
            OtpState::Expired
        );

        otp.is_verified = true;
        assert_eq!(otp.state_at(now, MAX_ATTEMPTS), OtpState::Verified);
        assert!(otp.state_at(now, MAX_ATTEMPTS).is_terminal());
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let otp = record(now);

        assert!(!otp.is_expired_at(otp.expires_at - Duration::seconds(1)));
        assert!(otp.is_expired_at(otp.expires_at));
    }

    #[test]
    fn test_matches_is_exact() {
        let mut otp = record(Utc::now());
        otp.code = "123456".to_string();

        assert!(otp.matches("123456"));
        assert!(!otp.matches("123457"));
        assert!(!otp.matches(" 123456"));
        assert!(!otp.matches("12345"));
    }

    #[test]
    fn test_remaining_attempts() {
        let mut otp = record(Utc::now());
        assert_eq!(otp.remaining_attempts(MAX_ATTEMPTS), 3);
        otp.attempt_count = 5;
        assert_eq!(otp.remaining_attempts(MAX_ATTEMPTS), 0);
    }
}
