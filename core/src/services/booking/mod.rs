//! Table reservations

mod service;


pub use service::BookingService;
