//! One-time password module for phone login
//!
//! - Issuing codes with a resend interval and an hourly quota derived from
//!   stored records
//! - Verifying codes with a per-record attempt cap
//! - Handing codes to a delivery channel without waiting on the outcome

mod mock;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use mock::MockOtpNotifier;
pub use service::OtpService;
pub use traits::OtpNotifier;
pub use types::{IssuedOtp, VerifyCodeResult};
