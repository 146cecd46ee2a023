//! Cashier PIN login and point-of-sale transactions

mod service;

#[cfg(test)]
mod tests;

pub use service::CashierService;
