//! Customer list export formats

pub mod xlsx;

pub use xlsx::{XlsxExporter, XLSX_CONTENT_TYPE};
