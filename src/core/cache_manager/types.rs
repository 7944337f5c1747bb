//! Cache store type definitions

use std::time::Duration;
use tokio::time::Instant;

/// Cache entry with expiry metadata
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the entry was created
    pub created_at: Instant,
    /// When the entry expires
    pub expires_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Create a new cache entry
    pub fn new(value: T, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// An entry is live strictly before its expiry instant
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    /// Get the age of the entry
    pub fn age(&self) -> Duration {
        Instant::now().duration_since(self.created_at)
    }
}

/// Cache statistics snapshot
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStoreStats {
    /// Current number of entries, live or not yet swept
    pub entries: usize,
    pub capacity: usize,
    /// Entries dropped to make room for new ones
    pub evictions: u64,
    /// Entries dropped because they were found expired
    pub expirations: u64,
}
