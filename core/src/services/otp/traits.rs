//! Trait for OTP delivery channels

use async_trait::async_trait;

/// Delivery channel for one-time codes
#[async_trait]
pub trait OtpNotifier: Send + Sync {
    /// Deliver `code` to `phone`; returns a provider message id
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String>;

    /// Short channel name for logs
    fn channel(&self) -> &'static str;
}
