//! Tests for the restaurant service

mod service_tests;
