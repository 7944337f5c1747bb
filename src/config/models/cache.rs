//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Search cache configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Search cache TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
    /// Maximum number of cached responses
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
    /// TTL for the specialization list, in seconds
    #[serde(default = "default_specializations_ttl")]
    pub specializations_ttl_secs: u64,
    /// Include the page number in search cache keys.
    ///
    /// Off by default: every page of one query shares a single cache entry,
    /// so a cached first page is also served for later pages.
    #[serde(default)]
    pub include_page_in_key: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            max_entries: default_cache_max_entries(),
            specializations_ttl_secs: default_specializations_ttl(),
            include_page_in_key: false,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn specializations_ttl(&self) -> Duration {
        Duration::from_secs(self.specializations_ttl_secs)
    }

    /// Merge cache configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.ttl_secs != default_cache_ttl() {
            self.ttl_secs = other.ttl_secs;
        }
        if other.max_entries != default_cache_max_entries() {
            self.max_entries = other.max_entries;
        }
        if other.specializations_ttl_secs != default_specializations_ttl() {
            self.specializations_ttl_secs = other.specializations_ttl_secs;
        }
        if other.include_page_in_key {
            self.include_page_in_key = other.include_page_in_key;
        }
        self
    }
}
