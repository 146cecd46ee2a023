//! Hashing for admin passwords and cashier PINs

mod hasher;

pub use hasher::SecretHasher;
