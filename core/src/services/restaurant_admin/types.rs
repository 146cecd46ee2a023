//! Request and response types of the admin panel

use serde::{Deserialize, Serialize};

use crate::domain::entities::cashier::Cashier;

/// Message returned with a freshly created cashier
pub const NEW_PIN_MESSAGE: &str = "Save this PIN - it will not be shown again.";

/// Message returned with a regenerated PIN
pub const REGENERATED_PIN_MESSAGE: &str = "New PIN generated. Save it - it will not be shown again.";

/// Cashier fields supplied by the admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCashier {
    pub name: String,
    pub phone_number: String,
}

/// A cashier together with its plaintext PIN, shown exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinIssued {
    pub cashier: Cashier,
    pub pin_code: String,
    pub message: String,
}

/// Rendered export ready to be sent as an attachment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}
