//! Analytics types and data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Weight kept from the previous latency average
pub const LATENCY_DECAY: f64 = 0.9;

/// Outcome category of a search attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchEventKind {
    /// Served from the response cache
    CacheHit,
    /// Attached to an identical in-flight request
    Deduped,
    /// Fresh backend call succeeded
    Success,
    /// Fresh backend call failed
    Error,
}

/// One analytics event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEvent {
    pub kind: SearchEventKind,
    pub cache_key: String,
    /// Backend latency attributed to this event; zero for cache hits
    pub latency: Duration,
    pub timestamp: DateTime<Utc>,
    /// Error message and cause chain, for `Error` events
    pub error: Option<String>,
}

/// Raw counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsCounters {
    pub total_searches: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub errors: u64,
    /// Exponentially weighted moving average, in milliseconds
    pub average_response_time_ms: f64,
    pub last_search_at: Option<DateTime<Utc>>,
}

impl AnalyticsCounters {
    /// Fold one latency sample into the moving average
    pub fn observe_latency(&mut self, sample_ms: f64) {
        self.average_response_time_ms = if self.average_response_time_ms == 0.0 {
            sample_ms
        } else {
            self.average_response_time_ms * LATENCY_DECAY + sample_ms * (1.0 - LATENCY_DECAY)
        };
    }

    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.cache_misses;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }

    pub fn error_rate(&self) -> f64 {
        if self.total_searches == 0 {
            0.0
        } else {
            self.errors as f64 / self.total_searches as f64
        }
    }
}

/// Snapshot returned by `SearchService::performance_metrics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_searches: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub errors: u64,
    pub average_response_time_ms: f64,
    pub last_search_at: Option<DateTime<Utc>>,
    pub cache_hit_rate: f64,
    pub error_rate: f64,
    pub cache_size: usize,
    pub in_flight: usize,
}
