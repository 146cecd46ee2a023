//! MySQL repository implementations
//!
//! Shared row helpers live here: UUID columns are `CHAR(36)` and every
//! driver error is reported to the domain as `DomainError::Internal`.

mod booking_repository_impl;
mod cashier_repository_impl;
mod otp_repository_impl;
mod restaurant_repository_impl;
mod transaction_repository_impl;
mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use cashier_repository_impl::MySqlCashierRepository;
pub use otp_repository_impl::MySqlOtpRepository;
pub use restaurant_repository_impl::MySqlRestaurantRepository;
pub use transaction_repository_impl::MySqlTransactionRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

use cg_core::errors::DomainError;

pub(crate) fn query_failed(context: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, context, "Database query failed");
    DomainError::internal(format!("{}: {}", context, error))
}

/// Map a duplicate-key failure to `Conflict`, anything else to `Internal`
pub(crate) fn write_failed(context: &str, what: &str, error: sqlx::Error) -> DomainError {
    let duplicate = error
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if duplicate {
        DomainError::Conflict {
            message: format!("{} already exists", what),
        }
    } else {
        query_failed(context, error)
    }
}

pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::internal(format!("Failed to get {}: {}", name, e)))
}

pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw)
        .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", name, e)))
}

pub(crate) fn optional_uuid_column(row: &MySqlRow, name: &str) -> Result<Option<Uuid>, DomainError> {
    let raw: Option<String> = column(row, name)?;
    raw.map(|value| {
        Uuid::parse_str(&value)
            .map_err(|e| DomainError::internal(format!("Invalid UUID in {}: {}", name, e)))
    })
    .transpose()
}
