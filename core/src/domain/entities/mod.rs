//! Domain entities representing core business objects.

pub mod booking;
pub mod cashier;
pub mod otp;
pub mod restaurant;
pub mod token;
pub mod transaction;
pub mod user;

// Re-export commonly used types
pub use booking::{NewBooking, TableBooking};
pub use cashier::{Cashier, CashierPatch, DEFAULT_PIN_LENGTH};
pub use otp::{OtpState, PhoneOtp, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};
pub use restaurant::{MenuImage, Restaurant, RestaurantDetail, RestaurantImage, RestaurantPatch};
pub use token::{Claims, Role, TokenPair, TokenType};
pub use transaction::{
    summarize_customers, CustomerFilter, CustomerSummary, Transaction, TransactionView,
};
pub use user::User;
