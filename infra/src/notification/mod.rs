//! OTP Delivery Module
//!
//! Implementations of `cg_core::services::otp::OtpNotifier`:
//!
//! - **LogNotifier**: writes the code to the log (development default)
//! - **TelegramNotifier**: posts the code through the Telegram Bot API

pub mod log;
pub mod telegram;

use std::sync::Arc;

use cg_core::services::otp::OtpNotifier;

use crate::config::{NotificationConfig, NotifierKind};

pub use self::log::LogNotifier;
pub use telegram::TelegramNotifier;

/// Create the delivery channel selected by `config`
///
/// The telegram channel falls back to the log channel when its token or
/// chat id is missing, or the HTTP client cannot be built.
pub fn create_notifier(config: &NotificationConfig) -> Arc<dyn OtpNotifier> {
    match config.notifier {
        NotifierKind::Log => Arc::new(LogNotifier::new()),
        NotifierKind::Telegram => {
            let (Some(token), Some(chat_id)) = (
                config.telegram_bot_token.as_deref(),
                config.telegram_chat_id.as_deref(),
            ) else {
                tracing::warn!("TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID missing, using log delivery");
                return Arc::new(LogNotifier::new());
            };

            match TelegramNotifier::new(token, chat_id) {
                Ok(notifier) => Arc::new(notifier),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to initialize Telegram delivery");
                    tracing::warn!("Falling back to log delivery");
                    Arc::new(LogNotifier::new())
                }
            }
        }
    }
}
