//! Phone number utilities
//!
//! Phone numbers are free-form strings (no country-specific validation);
//! they are only trimmed and bounded in length.

use regex::Regex;
use once_cell::sync::Lazy;

/// Maximum stored length of a phone number
pub const MAX_PHONE_LENGTH: usize = 20;

static FORMATTING_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s\-().]").unwrap()
});

/// Trim surrounding whitespace from a submitted phone number
pub fn normalize_phone_number(phone: &str) -> String {
    phone.trim().to_string()
}

/// Check the bounds applied to every stored phone number
pub fn is_valid_phone_length(phone: &str) -> bool {
    let trimmed = phone.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= MAX_PHONE_LENGTH
}

/// Mask a phone number for logs (e.g., +998****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let compact = FORMATTING_CHARS.replace_all(phone.trim(), "");
    let chars: Vec<char> = compact.chars().collect();
    if chars.len() >= 7 {
        let prefix_len = (chars.len() - 4).min(4);
        let prefix: String = chars[..prefix_len].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", prefix, suffix)
    } else {
        "****".to_string()
    }
}
