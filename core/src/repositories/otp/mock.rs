//! In-memory implementation of OtpRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp::PhoneOtp;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// Mock OTP repository backed by a vector, used by tests and local runs
#[derive(Clone, Default)]
pub struct MockOtpRepository {
    records: Arc<RwLock<Vec<PhoneOtp>>>,
}

impl MockOtpRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// All records for a phone number in insertion order
    pub async fn records_for(&self, phone_number: &str) -> Vec<PhoneOtp> {
        let records = self.records.read().await;
        records
            .iter()
            .filter(|r| r.phone_number == phone_number)
            .cloned()
            .collect()
    }

    /// Overwrite a stored record
    pub async fn replace(&self, otp: PhoneOtp) {
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter_mut().find(|r| r.id == otp.id) {
            *existing = otp;
        }
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn create(&self, otp: PhoneOtp) -> Result<PhoneOtp, DomainError> {
        let mut records = self.records.write().await;
        records.push(otp.clone());
        Ok(otp)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PhoneOtp>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    async fn find_latest_pending(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PhoneOtp>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.phone_number == phone_number && !r.is_verified && r.expires_at > now)
            .max_by_key(|r| r.created_at)
            .cloned())
    }

    async fn count_created_since(
        &self,
        phone_number: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.phone_number == phone_number && r.created_at > since)
            .count() as u64)
    }

    async fn record_failed_attempt(
        &self,
        id: Uuid,
        seen_attempts: u32,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records
            .iter_mut()
            .find(|r| r.id == id && !r.is_verified && r.attempt_count == seen_attempts)
        {
            Some(record) => {
                record.attempt_count += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_verified(
        &self,
        id: Uuid,
        seen_attempts: u32,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| {
            r.id == id && !r.is_verified && r.attempt_count == seen_attempts && r.expires_at > now
        }) {
            Some(record) => {
                record.is_verified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
