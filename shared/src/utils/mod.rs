//! Common utility functions

pub mod phone;
pub mod search;

pub use phone::*;
pub use search::*;
