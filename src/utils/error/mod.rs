//! Error handling for the search orchestrator
//!
//! This module defines the error taxonomy used by the backend client, the
//! deduplicator and the search service, plus the mapping of each failure to
//! the message shown to end users.

mod conversions;
mod helpers;
mod types;

pub use types::{Result, SearchError};
