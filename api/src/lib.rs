//! # Chegirma API
//!
//! Actix-web surface of the Chegirma backend: route table, JWT middleware,
//! request/response bodies and the mapping of domain errors to HTTP.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use app::create_app;
pub use state::{AppState, Repositories, ServiceSettings};
