//! Token service module for JWT management
//!
//! Access and refresh tokens are stateless HS256 JWTs; nothing is stored
//! server-side.

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenService;
