//! Type definitions shared by the API and service layers
//!
//! - `pagination` - Page/page-size handling for list endpoints
//! - `response` - Simple message and health check bodies

pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, Pagination};
pub use response::{HealthResponse, MessageResponse};
