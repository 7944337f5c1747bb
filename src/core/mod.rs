//! Core functionality for the search service
//!
//! Leaf modules first: models, the cache store, the deduplicator, the remote
//! client and analytics. [`search`] composes them.

pub mod analytics;
pub mod cache_manager;
pub mod client;
pub mod dedup;
pub mod models;
pub mod search;
