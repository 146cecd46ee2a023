//! Business services containing domain logic and use cases.

pub mod auth;
pub mod booking;
pub mod cashier;
pub mod otp;
pub mod restaurant;
pub mod restaurant_admin;
pub mod security;
pub mod token;
pub mod transaction;
pub mod user;

mod validation;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use auth::AuthService;
pub use booking::BookingService;
pub use cashier::CashierService;
pub use otp::{IssuedOtp, MockOtpNotifier, OtpNotifier, OtpService, VerifyCodeResult};
pub use restaurant::RestaurantService;
pub use restaurant_admin::{CustomerExporter, ExportFile, NewCashier, PinIssued, RestaurantAdminService};
pub use security::SecretHasher;
pub use token::TokenService;
pub use transaction::TransactionService;
pub use user::{LikeAction, LikeResult, UserProfile, UserService};
