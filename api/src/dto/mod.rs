//! Request and response bodies of the HTTP API

pub mod admin;
pub mod auth;
pub mod restaurant;
pub mod user;

pub use admin::*;
pub use auth::*;
pub use restaurant::*;
pub use user::*;
