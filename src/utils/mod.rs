//! Utility modules for the search service
//!
//! - **error**: Error types, classification and user-facing messages
//! - **logging**: `tracing` subscriber setup

pub mod error; // Error handling
pub mod logging; // Logging setup
