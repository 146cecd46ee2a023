//! Authentication route handlers
//!
//! This module contains the sign-in endpoints:
//! - Phone verification (requesting and verifying one-time codes)
//! - Token refresh
//! - Password login for restaurant admins

pub mod admin_login;
pub mod refresh;
pub mod request_otp;
pub mod verify_otp;

pub use admin_login::admin_login;
pub use refresh::refresh_token;
pub use request_otp::request_otp;
pub use verify_otp::verify_otp;
