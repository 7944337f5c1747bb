//! Integration tests for physio-search
//!
//! These tests exercise the public API over real HTTP against a `wiremock`
//! backend.

pub mod config_tests;
pub mod http_backend_tests;
pub mod search_service_tests;
