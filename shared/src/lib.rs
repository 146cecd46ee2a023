//! Shared utilities and common types for the Chegirma server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Pagination and response wrappers
//! - Utility functions (phone masking, search terms)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig, OtpConfig,
    SecurityConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{HealthResponse, MessageResponse, PaginatedResponse, Pagination};
pub use utils::{phone, search};
