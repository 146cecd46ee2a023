//! Recording notifier for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::traits::OtpNotifier;

/// Keeps the last code sent to each phone instead of delivering it
#[derive(Clone, Default)]
pub struct MockOtpNotifier {
    sent: Arc<Mutex<HashMap<String, Vec<String>>>>,
    failing: Arc<AtomicBool>,
}

impl MockOtpNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier whose deliveries always fail
    pub fn failing() -> Self {
        let notifier = Self::default();
        notifier.failing.store(true, Ordering::SeqCst);
        notifier
    }

    /// Most recent code handed over for `phone`
    pub fn last_code(&self, phone: &str) -> Option<String> {
        self.sent
            .lock()
            .ok()
            .and_then(|sent| sent.get(phone).and_then(|codes| codes.last().cloned()))
    }

    /// Number of delivery attempts for `phone`
    pub fn sent_count(&self, phone: &str) -> usize {
        self.sent
            .lock()
            .map(|sent| sent.get(phone).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

#[async_trait]
impl OtpNotifier for MockOtpNotifier {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.entry(phone.to_string())
                .or_default()
                .push(code.to_string());
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err("mock delivery failure".to_string());
        }
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }

    fn channel(&self) -> &'static str {
        "mock"
    }
}
