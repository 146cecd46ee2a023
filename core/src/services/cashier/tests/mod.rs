//! Tests for the cashier service

mod service_tests;
