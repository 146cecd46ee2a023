//! Tests for the restaurant admin service

mod service_tests;
