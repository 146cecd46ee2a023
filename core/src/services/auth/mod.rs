//! Authentication service module
//!
//! Login flows for the three kinds of principals:
//! - Customers sign in with a phone OTP and are created on first login
//! - Restaurant admins sign in with phone and password
//! - Refresh tokens of either role are exchanged for new access tokens
//!
//! Cashier PIN login lives in the cashier module.

mod service;

#[cfg(test)]
mod tests;

pub use service::AuthService;
