//! Repository interfaces and their in-memory implementations.

pub mod booking;
pub mod cashier;
pub mod otp;
pub mod restaurant;
pub mod transaction;
pub mod user;

pub use booking::{BookingRepository, MockBookingRepository};
pub use cashier::{CashierRepository, MockCashierRepository};
pub use otp::{MockOtpRepository, OtpRepository};
pub use restaurant::{MockRestaurantRepository, RestaurantRepository};
pub use transaction::{MockTransactionRepository, TransactionRepository};
pub use user::{MockUserRepository, UserRepository};
