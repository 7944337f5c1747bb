//! Core error types

use std::time::Duration;
use thiserror::Error;

/// Result type alias for the search orchestrator
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type for the search orchestrator
///
/// The type is `Clone` because a single in-flight backend call can be awaited
/// by several callers, and each of them receives the same outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The backend call did not complete within the configured timeout
    #[error("Search request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The backend answered but reported failure or returned no payload
    #[error("Search request failed: {0}")]
    RequestFailed(String),

    /// Transport-level failure (connection refused, DNS, reset, ...)
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// Backend answered with HTTP 429
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Backend answered with HTTP 5xx
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Backend answered with another non-success HTTP status
    #[error("HTTP error ({status}): {message}")]
    Http { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure surfaced to `search()` callers, carrying the classified cause
    #[error("{message}")]
    SearchFailed {
        message: String,
        cause: Option<Box<SearchError>>,
    },
}
