//! Bounded TTL cache for backend responses
//!
//! Entries expire lazily on lookup. When the store is full, the oldest
//! inserted entry is evicted; reads never refresh an entry's position.

pub mod manager;
pub mod types;


pub use manager::CacheStore;
pub use types::{CacheEntry, CacheStoreStats};
