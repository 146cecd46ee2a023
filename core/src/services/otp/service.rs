//! OTP issuance and verification

use chrono::{Duration, Utc};
use std::sync::Arc;

use cg_shared::config::OtpConfig;
use cg_shared::utils::phone::{mask_phone_number, normalize_phone_number, MAX_PHONE_LENGTH};

use crate::domain::entities::otp::{OtpState, PhoneOtp};
use crate::errors::{DomainError, DomainResult, OtpError, RateLimitReason};
use crate::repositories::OtpRepository;
use crate::services::validation::required_text;

use super::traits::OtpNotifier;
use super::types::{IssuedOtp, VerifyCodeResult};

/// Upper bound on re-reads after losing a conditional update. A record can
/// change at most `max_attempts + 1` times, so this is never reached with the
/// default configuration.
const MAX_CAS_RETRIES: usize = 8;

/// Service issuing and verifying one-time codes
pub struct OtpService {
    repository: Arc<dyn OtpRepository>,
    notifier: Arc<dyn OtpNotifier>,
    config: OtpConfig,
}

impl OtpService {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `repository` - Storage for OTP records
    /// * `notifier` - Delivery channel for issued codes
    /// * `config` - Lifetime, resend interval and quotas
    pub fn new(
        repository: Arc<dyn OtpRepository>,
        notifier: Arc<dyn OtpNotifier>,
        config: OtpConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            config,
        }
    }

    /// Limits this service was built with
    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Issue a new code for a phone number
    ///
    /// This method:
    /// 1. Refuses when a code was issued inside the resend interval
    /// 2. Refuses when the hourly quota is used up
    /// 3. Stores a new record with a random code
    /// 4. Hands the code to the delivery channel; delivery errors are only logged
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedOtp)` - The stored code and its expiry
    /// * `Err(DomainError::Otp(OtpError::RateLimited { .. }))` - Too soon or over quota
    pub async fn issue(&self, phone: &str) -> DomainResult<IssuedOtp> {
        let phone = validate_phone(phone)?;
        let masked = mask_phone_number(&phone);
        let now = Utc::now();

        if self.config.resend_interval_seconds > 0 {
            let since = now - Duration::seconds(self.config.resend_interval_seconds);
            if self.repository.count_created_since(&phone, since).await? > 0 {
                tracing::warn!(
                    phone = %masked,
                    event = "otp_rate_limited",
                    reason = "too_soon",
                    "OTP requested inside the resend interval"
                );
                return Err(OtpError::RateLimited {
                    reason: RateLimitReason::TooSoon,
                }
                .into());
            }
        }

        let window_start = now - Duration::minutes(self.config.quota_window_minutes);
        let issued_in_window = self.repository.count_created_since(&phone, window_start).await?;
        if issued_in_window >= u64::from(self.config.max_requests_per_hour) {
            tracing::warn!(
                phone = %masked,
                event = "otp_rate_limited",
                reason = "quota_exceeded",
                issued_in_window = issued_in_window,
                "OTP quota exhausted"
            );
            return Err(OtpError::RateLimited {
                reason: RateLimitReason::QuotaExceeded,
            }
            .into());
        }

        let otp = PhoneOtp::new(
            phone.clone(),
            now,
            Duration::minutes(self.config.expiry_minutes),
        );
        let otp = self.repository.create(otp).await?;

        tracing::info!(
            phone = %masked,
            event = "otp_issued",
            otp_id = %otp.id,
            expires_at = %otp.expires_at,
            "Issued one-time code"
        );

        self.dispatch(&otp).await;

        Ok(IssuedOtp {
            phone_number: otp.phone_number,
            code: otp.code,
            expires_at: otp.expires_at,
        })
    }

    async fn dispatch(&self, otp: &PhoneOtp) {
        let masked = mask_phone_number(&otp.phone_number);
        match self.notifier.send_code(&otp.phone_number, &otp.code).await {
            Ok(message_id) => tracing::debug!(
                phone = %masked,
                channel = self.notifier.channel(),
                message_id = %message_id,
                "OTP handed to delivery channel"
            ),
            Err(error) => tracing::warn!(
                phone = %masked,
                channel = self.notifier.channel(),
                error = %error,
                event = "otp_delivery_failed",
                "OTP delivery failed"
            ),
        }
    }

    /// Verify a submitted code against the latest pending record
    ///
    /// The record is read, then changed with a conditional update that only
    /// applies if nobody else touched it in between; a lost update re-reads.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The code matched and the record is now verified
    /// * `Err(OtpError::NotFound)` - No unverified, unexpired record
    /// * `Err(OtpError::TooManyAttempts)` - The record is locked
    /// * `Err(OtpError::InvalidCode)` - Mismatch; the attempt was counted
    pub async fn verify(&self, phone: &str, code: &str) -> DomainResult<()> {
        let phone = normalize_phone_number(phone);
        let masked = mask_phone_number(&phone);

        for _ in 0..MAX_CAS_RETRIES {
            let now = Utc::now();
            let otp = match self.repository.find_latest_pending(&phone, now).await? {
                Some(otp) => otp,
                None => {
                    tracing::info!(phone = %masked, event = "otp_not_found", "No pending OTP");
                    return Err(OtpError::NotFound.into());
                }
            };

            match otp.state_at(now, self.config.max_attempts) {
                OtpState::Pending => {}
                OtpState::Locked => {
                    tracing::warn!(
                        phone = %masked,
                        otp_id = %otp.id,
                        event = "otp_locked",
                        "OTP attempt cap reached"
                    );
                    return Err(OtpError::TooManyAttempts.into());
                }
                OtpState::Verified | OtpState::Expired => return Err(OtpError::NotFound.into()),
            }

            if !otp.matches(code) {
                if self
                    .repository
                    .record_failed_attempt(otp.id, otp.attempt_count)
                    .await?
                {
                    tracing::info!(
                        phone = %masked,
                        otp_id = %otp.id,
                        attempts = otp.attempt_count + 1,
                        event = "otp_invalid_code",
                        "Wrong OTP submitted"
                    );
                    return Err(OtpError::InvalidCode.into());
                }
                continue;
            }

            if self
                .repository
                .mark_verified(otp.id, otp.attempt_count, now)
                .await?
            {
                tracing::info!(
                    phone = %masked,
                    otp_id = %otp.id,
                    event = "otp_verified",
                    "OTP verified"
                );
                return Ok(());
            }

            tracing::debug!(otp_id = %otp.id, "OTP changed concurrently, re-reading");
        }

        Err(DomainError::internal("OTP record kept changing during verification"))
    }

    /// Verify and flatten the outcome into `(success, message)`
    ///
    /// Storage failures are still returned as errors.
    pub async fn verify_outcome(&self, phone: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        match self.verify(phone, code).await {
            Ok(()) => Ok(VerifyCodeResult::success()),
            Err(DomainError::Otp(error)) => Ok(error.into()),
            Err(other) => Err(other),
        }
    }
}

/// Trim and bound a submitted phone number
pub(crate) fn validate_phone(phone: &str) -> DomainResult<String> {
    required_text("phone_number", phone, MAX_PHONE_LENGTH)
}
