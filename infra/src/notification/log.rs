//! Log delivery channel
//!
//! Writes the code to the application log instead of sending it anywhere.
//! This is the development default; it is the only place a plaintext code
//! is ever logged.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use cg_core::services::otp::OtpNotifier;
use cg_shared::utils::phone::mask_phone_number;

#[derive(Clone, Default)]
pub struct LogNotifier {
    sent: Arc<AtomicU64>,
}

impl LogNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of codes written so far
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OtpNotifier for LogNotifier {
    async fn send_code(&self, phone_number: &str, code: &str) -> Result<String, String> {
        let message_id = format!("log_{}", Uuid::new_v4());
        self.sent.fetch_add(1, Ordering::SeqCst);

        tracing::info!(
            target: "otp_delivery",
            channel = "log",
            message_id = %message_id,
            "OTP for {}: {}",
            mask_phone_number(phone_number),
            code
        );

        Ok(message_id)
    }

    fn channel(&self) -> &'static str {
        "log"
    }
}
