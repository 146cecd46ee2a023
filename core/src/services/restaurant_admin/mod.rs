//! Restaurant admin panel
//!
//! Every operation is scoped to the restaurant linked to the signed-in admin.
//! Spreadsheet rendering is delegated to a `CustomerExporter`.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::RestaurantAdminService;
pub use traits::CustomerExporter;
pub use types::{ExportFile, NewCashier, PinIssued};
