//! XLSX rendering of the restaurant customer list

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use cg_core::domain::entities::transaction::CustomerSummary;
use cg_core::errors::DomainResult;
use cg_core::services::restaurant_admin::CustomerExporter;

use crate::InfrastructureError;

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Customers";
const COLUMN_WIDTH: f64 = 20.0;
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub const HEADERS: [&str; 7] = [
    "Phone Number",
    "Full Name",
    "Total Transactions",
    "Total Before Discount",
    "Total Discount",
    "Total After Discount",
    "Last Transaction",
];

/// Renders customer summaries as a single-sheet workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxExporter;

impl XlsxExporter {
    pub fn new() -> Self {
        Self
    }

    fn build(rows: &[CustomerSummary]) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        let bold = Format::new().set_bold();
        for (col, header) in HEADERS.iter().enumerate() {
            let col = col as u16;
            sheet.write_string_with_format(0, col, *header, &bold)?;
            sheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        for (index, summary) in rows.iter().enumerate() {
            write_row(sheet, index as u32 + 1, summary)?;
        }

        workbook.save_to_buffer()
    }
}

fn write_row(sheet: &mut Worksheet, row: u32, summary: &CustomerSummary) -> Result<(), XlsxError> {
    sheet.write_string(row, 0, summary.phone_number.as_deref().unwrap_or_default())?;
    sheet.write_string(row, 1, &summary.full_name)?;
    sheet.write_number(row, 2, summary.total_transactions as f64)?;
    sheet.write_number(row, 3, money(summary.total_before_discount))?;
    sheet.write_number(row, 4, money(summary.total_discount))?;
    sheet.write_number(row, 5, money(summary.total_after_discount))?;
    sheet.write_string(row, 6, last_transaction_text(summary))?;
    Ok(())
}

fn money(amount: Decimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

/// `YYYY-MM-DD HH:MM`, or empty when the customer has no transactions
pub fn last_transaction_text(summary: &CustomerSummary) -> String {
    summary
        .last_transaction_date
        .map(|at| at.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

impl CustomerExporter for XlsxExporter {
    fn render(&self, rows: &[CustomerSummary]) -> DomainResult<Vec<u8>> {
        let bytes = Self::build(rows).map_err(|e| {
            tracing::error!(error = %e, "Failed to render customer workbook");
            InfrastructureError::Export(e.to_string())
        })?;
        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        XLSX_CONTENT_TYPE
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}
