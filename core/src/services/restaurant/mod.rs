//! Public restaurant catalogue

mod service;

#[cfg(test)]
mod tests;

pub use service::RestaurantService;
