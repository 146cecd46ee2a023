//! Telegram Bot API delivery channel
//!
//! Posts "Your Chegirma code: NNNNNN" to a configured chat through
//! `sendMessage`. The Bot API answers `{"ok": bool, "result": {...}}`;
//! the returned message id is the Telegram `message_id`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use cg_core::services::otp::OtpNotifier;
use cg_shared::utils::phone::mask_phone_number;

use crate::InfrastructureError;

const DEFAULT_API_BASE: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: String,
}

#[derive(Debug, Deserialize)]
struct BotResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Debug, Deserialize)]
struct SentMessage {
    message_id: i64,
}

pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| InfrastructureError::Notification(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base: DEFAULT_API_BASE.to_string(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        })
    }

    /// Point the notifier at a different Bot API host
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }

    fn message_text(phone_number: &str, code: &str) -> String {
        format!(
            "Your Chegirma code: {}\nPhone: {}",
            code,
            mask_phone_number(phone_number)
        )
    }
}

#[async_trait]
impl OtpNotifier for TelegramNotifier {
    async fn send_code(&self, phone_number: &str, code: &str) -> Result<String, String> {
        let masked = mask_phone_number(phone_number);
        let body = SendMessage {
            chat_id: &self.chat_id,
            text: Self::message_text(phone_number, code),
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Telegram request failed: {}", e))?;

        let status = response.status();
        let reply: BotResponse = response
            .json()
            .await
            .map_err(|e| format!("Telegram response unreadable ({}): {}", status, e))?;

        if !status.is_success() || !reply.ok {
            let reason = reply.description.unwrap_or_else(|| status.to_string());
            tracing::warn!(phone = %masked, status = %status, "Telegram rejected OTP message");
            return Err(format!("Telegram API error: {}", reason));
        }

        let message_id = reply
            .result
            .map(|sent| sent.message_id.to_string())
            .unwrap_or_default();
        tracing::info!(phone = %masked, message_id = %message_id, channel = "telegram", "OTP delivered");

        Ok(message_id)
    }

    fn channel(&self) -> &'static str {
        "telegram"
    }
}
