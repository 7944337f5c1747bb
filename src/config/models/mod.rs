//! Configuration data models
//!
//! This module defines all configuration structures used by the search service.

pub mod api;
pub mod cache;
pub mod defaults;
pub mod logging;
pub mod search;

// Re-export all configuration types
pub use api::*;
pub use cache::*;
pub use defaults::*;
pub use logging::*;
pub use search::*;

/// Default backend base URL
pub fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

/// Default backend request timeout in seconds
pub fn default_timeout_secs() -> u64 {
    10
}

pub fn default_user_agent() -> String {
    concat!("physio-search/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default search cache TTL in seconds (5 minutes)
pub fn default_cache_ttl() -> u64 {
    300
}

pub fn default_cache_max_entries() -> usize {
    100
}

/// Default specialization list TTL in seconds (1 hour)
pub fn default_specializations_ttl() -> u64 {
    3600
}

pub fn default_featured_limit() -> u32 {
    6
}

pub fn default_suggestion_limit() -> u32 {
    5
}

pub fn default_min_suggestion_query_len() -> usize {
    2
}

pub fn default_log_level() -> String {
    "info".to_string()
}
