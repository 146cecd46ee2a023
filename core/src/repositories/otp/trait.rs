//! OTP repository trait defining the persistence contract for one-time codes.
//!
//! Rate limits are answered from stored rows (`count_created_since`), and the
//! two mutations are conditional so concurrent verifications of the same
//! record cannot lose an attempt or verify twice.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::otp::PhoneOtp;
use crate::errors::DomainError;

/// Repository trait for OTP record persistence
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Persist a newly issued record
    async fn create(&self, otp: PhoneOtp) -> Result<PhoneOtp, DomainError>;

    /// Find a record by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PhoneOtp>, DomainError>;

    /// Most recently created record for `phone_number` that is unverified and
    /// whose `expires_at` is after `now`
    async fn find_latest_pending(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PhoneOtp>, DomainError>;

    /// Number of records for `phone_number` with `created_at` strictly after `since`
    async fn count_created_since(
        &self,
        phone_number: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError>;

    /// Increment the attempt counter if the record is still unverified and
    /// still has `seen_attempts` attempts.
    ///
    /// # Returns
    /// * `Ok(true)` - The increment was applied
    /// * `Ok(false)` - The record changed since it was read
    async fn record_failed_attempt(
        &self,
        id: Uuid,
        seen_attempts: u32,
    ) -> Result<bool, DomainError>;

    /// Flip the verified flag if the record is still unverified, unexpired at
    /// `now` and still has `seen_attempts` attempts.
    ///
    /// # Returns
    /// * `Ok(true)` - This call verified the record
    /// * `Ok(false)` - The record changed since it was read
    async fn mark_verified(
        &self,
        id: Uuid,
        seen_attempts: u32,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError>;
}
