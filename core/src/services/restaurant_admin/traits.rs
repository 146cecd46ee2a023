//! Trait for rendering the customer list as a file

use crate::domain::entities::transaction::CustomerSummary;
use crate::errors::DomainResult;

/// Renders customer summaries into a downloadable document
pub trait CustomerExporter: Send + Sync {
    /// Document bytes for `rows`, in the given order
    fn render(&self, rows: &[CustomerSummary]) -> DomainResult<Vec<u8>>;

    /// MIME type of the rendered document
    fn content_type(&self) -> &'static str;

    /// File extension without the dot
    fn extension(&self) -> &'static str;
}
