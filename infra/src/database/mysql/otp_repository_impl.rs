//! MySQL implementation of the OtpRepository trait.
//!
//! Both mutations are single conditional `UPDATE` statements; the caller
//! learns whether its snapshot was still current from `rows_affected()`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cg_core::domain::entities::otp::PhoneOtp;
use cg_core::errors::DomainError;
use cg_core::repositories::OtpRepository;
use cg_shared::utils::phone::mask_phone_number;

use super::{column, query_failed, uuid_column, write_failed};

const SELECT_COLUMNS: &str = r#"
    SELECT id, phone_number, code, created_at, expires_at, is_verified, attempt_count
    FROM phone_otps
"#;

/// MySQL implementation of OtpRepository
pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_otp(row: &MySqlRow) -> Result<PhoneOtp, DomainError> {
        Ok(PhoneOtp {
            id: uuid_column(row, "id")?,
            phone_number: column(row, "phone_number")?,
            code: column(row, "code")?,
            created_at: column(row, "created_at")?,
            expires_at: column(row, "expires_at")?,
            is_verified: column(row, "is_verified")?,
            attempt_count: column(row, "attempt_count")?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn create(&self, otp: PhoneOtp) -> Result<PhoneOtp, DomainError> {
        let query = r#"
            INSERT INTO phone_otps (
                id, phone_number, code, created_at, expires_at, is_verified, attempt_count
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(otp.id.to_string())
            .bind(&otp.phone_number)
            .bind(&otp.code)
            .bind(otp.created_at)
            .bind(otp.expires_at)
            .bind(otp.is_verified)
            .bind(otp.attempt_count)
            .execute(&self.pool)
            .await
            .map_err(|e| write_failed("Failed to store OTP", "OTP record", e))?;

        tracing::debug!(
            phone = %mask_phone_number(&otp.phone_number),
            otp_id = %otp.id,
            "Stored OTP record"
        );

        Ok(otp)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PhoneOtp>, DomainError> {
        let query = format!("{} WHERE id = ? LIMIT 1", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to load OTP", e))?;

        row.as_ref().map(Self::row_to_otp).transpose()
    }

    async fn find_latest_pending(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<PhoneOtp>, DomainError> {
        let query = format!(
            "{} WHERE phone_number = ? AND is_verified = FALSE AND expires_at > ? \
             ORDER BY created_at DESC LIMIT 1",
            SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(phone_number)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("Failed to load pending OTP", e))?;

        row.as_ref().map(Self::row_to_otp).transpose()
    }

    async fn count_created_since(
        &self,
        phone_number: &str,
        since: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM phone_otps WHERE phone_number = ? AND created_at > ?",
        )
        .bind(phone_number)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to count OTP requests", e))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn record_failed_attempt(
        &self,
        id: Uuid,
        seen_attempts: u32,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE phone_otps
            SET attempt_count = attempt_count + 1
            WHERE id = ? AND is_verified = FALSE AND attempt_count = ?
            "#,
        )
        .bind(id.to_string())
        .bind(seen_attempts)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to record OTP attempt", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn mark_verified(
        &self,
        id: Uuid,
        seen_attempts: u32,
        now: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE phone_otps
            SET is_verified = TRUE
            WHERE id = ? AND is_verified = FALSE AND attempt_count = ? AND expires_at > ?
            "#,
        )
        .bind(id.to_string())
        .bind(seen_attempts)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("Failed to mark OTP verified", e))?;

        Ok(result.rows_affected() == 1)
    }
}
