//! Cache store implementation

use super::types::{CacheEntry, CacheStoreStats};
use crate::config::CacheConfig;
use crate::utils::error::{Result, SearchError};
use lru::LruCache;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Bounded, TTL-based key-value store
///
/// The underlying `LruCache` is used purely as an insertion-ordered map:
/// lookups go through `peek`, so the eviction candidate is always the
/// oldest inserted key, never the least recently read one.
pub struct CacheStore<V> {
    entries: Mutex<LruCache<String, CacheEntry<V>>>,
    capacity: usize,
    default_ttl: Duration,
    evictions: AtomicU64,
    expirations: AtomicU64,
}

impl<V: Clone> CacheStore<V> {
    /// Create a new cache store
    pub fn new(capacity: usize, default_ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(SearchError::config(
                "Invalid cache configuration: max_entries must be greater than 0",
            ));
        }

        Ok(Self {
            entries: Mutex::new(LruCache::unbounded()),
            capacity,
            default_ttl,
            evictions: AtomicU64::new(0),
            expirations: AtomicU64::new(0),
        })
    }

    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.max_entries, config.ttl())
    }

    /// Get a live value, dropping the entry if it has expired
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.lock();

        let expired = match entries.peek(key) {
            Some(entry) if !entry.is_expired() => {
                debug!(cache_key = key, "Cache hit");
                return Some(entry.value.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(key);
            self.expirations.fetch_add(1, Ordering::Relaxed);
            debug!(cache_key = key, "Dropped expired cache entry");
        }

        None
    }

    /// Whether a live entry exists, without removing stale ones
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .lock()
            .peek(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    /// Store a value with the default TTL
    pub fn put(&self, key: impl Into<String>, value: V) {
        self.put_with_ttl(key, value, self.default_ttl);
    }

    /// Store a value with an explicit TTL
    ///
    /// When the store is at capacity, exactly one entry (the oldest inserted)
    /// is evicted first. Overwriting a key keeps its insertion position.
    pub fn put_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let entry = CacheEntry::new(value, ttl);
        let mut entries = self.entries.lock();

        if entries.len() >= self.capacity {
            if let Some((evicted, _)) = entries.pop_lru() {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(cache_key = %evicted, "Evicted oldest cache entry");
            }
        }

        match entries.peek_mut(&key) {
            Some(existing) => *existing = entry,
            None => {
                entries.put(key, entry);
            }
        }
    }

    /// Remove one entry
    pub fn remove(&self, key: &str) -> Option<V> {
        self.entries.lock().pop(key).map(|entry| entry.value)
    }

    /// Drop every entry
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let dropped = entries.len();
        entries.clear();
        debug!(dropped, "Cache cleared");
    }

    /// Number of stored entries, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStoreStats {
        CacheStoreStats {
            entries: self.len(),
            capacity: self.capacity,
            evictions: self.evictions.load(Ordering::Relaxed),
            expirations: self.expirations.load(Ordering::Relaxed),
        }
    }
}
