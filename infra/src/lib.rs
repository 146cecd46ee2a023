//! # Infrastructure Layer
//!
//! Concrete implementations of the ports defined in `cg_core`:
//!
//! - **Database**: MySQL repositories using SQLx, plus the embedded migrations
//! - **Notification**: OTP delivery channels (log output, Telegram bot)
//! - **Export**: XLSX rendering of the restaurant admin customer list

// Re-export core types for convenience
pub use cg_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// OTP delivery channels
pub mod notification;

/// Spreadsheet export of customer summaries
pub mod export;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration owned by the infrastructure layer
    //!
    //! Database settings live in `cg_shared::config`; this module adds the
    //! OTP delivery settings that only infra needs.

    use serde::{Deserialize, Serialize};

    pub use cg_shared::config::DatabaseConfig;

    /// Which channel delivers OTP codes
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
    #[serde(rename_all = "lowercase")]
    pub enum NotifierKind {
        /// Write the code to the application log
        #[default]
        Log,
        /// Post the code to a Telegram chat through the Bot API
        Telegram,
    }

    impl std::str::FromStr for NotifierKind {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_lowercase().as_str() {
                "log" | "console" => Ok(NotifierKind::Log),
                "telegram" => Ok(NotifierKind::Telegram),
                other => Err(format!("Unknown OTP notifier: {}", other)),
            }
        }
    }

    /// OTP delivery configuration
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct NotificationConfig {
        /// Selected delivery channel
        pub notifier: NotifierKind,
        /// Telegram bot token, required for the telegram channel
        pub telegram_bot_token: Option<String>,
        /// Chat that receives the codes
        pub telegram_chat_id: Option<String>,
    }

    impl NotificationConfig {
        /// Load from `OTP_NOTIFIER`, `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`
        ///
        /// An unrecognised `OTP_NOTIFIER` falls back to the log channel.
        pub fn from_env() -> Self {
            let notifier = std::env::var("OTP_NOTIFIER")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_default();

            Self {
                notifier,
                telegram_bot_token: non_empty_env("TELEGRAM_BOT_TOKEN"),
                telegram_chat_id: non_empty_env("TELEGRAM_CHAT_ID"),
            }
        }

        pub fn telegram(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
            Self {
                notifier: NotifierKind::Telegram,
                telegram_bot_token: Some(bot_token.into()),
                telegram_chat_id: Some(chat_id.into()),
            }
        }
    }

    fn non_empty_env(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|value| !value.trim().is_empty())
    }

}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// OTP delivery channel error
    #[error("Notification error: {0}")]
    Notification(String),

    /// Spreadsheet rendering error
    #[error("Export error: {0}")]
    Export(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        DomainError::internal(error.to_string())
    }
}
