//! Customer transaction history

mod service;


pub use service::TransactionService;
