//! Field checks shared by the services

use crate::errors::{DomainResult, ValidationError};

/// Trimmed, non-empty text of at most `max` characters
pub(crate) fn required_text(field: &str, value: &str, max: usize) -> DomainResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        }
        .into());
    }
    bounded_text(field, value, max)
}

/// Text of at most `max` characters
pub(crate) fn bounded_text(field: &str, value: &str, max: usize) -> DomainResult<String> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        }
        .into());
    }
    Ok(value.to_string())
}
