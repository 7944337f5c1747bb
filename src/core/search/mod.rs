//! Search orchestration
//!
//! [`SearchService`] ties the cache store, the request deduplicator, the
//! remote client and the analytics recorder together.

mod fallback;
mod service;

pub use fallback::FALLBACK_SPECIALIZATIONS;
pub use service::{FEATURED_KEY_PREFIX, SPECIALIZATIONS_KEY, SearchService};
