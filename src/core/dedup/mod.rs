//! Single-flight request deduplication
//!
//! Concurrent callers asking for the same key share one in-flight future and
//! observe the same outcome.

pub mod deduplicator;


pub use deduplicator::{DedupOutcome, RequestDeduplicator, SharedRequest};
