//! Customer profile and liked restaurants

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::UserService;
pub use types::{LikeAction, LikeResult, UserProfile};
