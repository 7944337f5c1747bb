//! Analytics recorder

use super::types::{AnalyticsCounters, PerformanceMetrics, SearchEvent, SearchEventKind};
use crate::utils::error::SearchError;
use chrono::Utc;
use parking_lot::Mutex;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// External destination for search events
///
/// Errors and panics raised by a sink are logged and discarded; they never
/// reach the search caller.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: &SearchEvent) -> Result<(), String>;
}

/// Counters and event emission for search attempts
#[derive(Default)]
pub struct SearchAnalytics {
    counters: Mutex<AnalyticsCounters>,
    sink: Option<Arc<dyn AnalyticsSink>>,
}

impl SearchAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            counters: Mutex::default(),
            sink: Some(sink),
        }
    }

    /// Count a search before any cache or network work happens
    pub fn record_search_started(&self) {
        let mut counters = self.counters.lock();
        counters.total_searches += 1;
        counters.last_search_at = Some(Utc::now());
    }

    pub fn record_cache_hit(&self, cache_key: &str) {
        self.counters.lock().cache_hits += 1;
        debug!(cache_key, outcome = "CACHE_HIT", "Search served from cache");
        self.emit(SearchEventKind::CacheHit, cache_key, Duration::ZERO, None);
    }

    /// Attached to an in-flight request; counts as neither hit nor miss
    pub fn record_deduped(&self, cache_key: &str) {
        debug!(cache_key, outcome = "DEDUPED", "Search joined in-flight request");
        self.emit(SearchEventKind::Deduped, cache_key, Duration::ZERO, None);
    }

    pub fn record_cache_miss(&self, cache_key: &str) {
        self.counters.lock().cache_misses += 1;
        debug!(cache_key, "Search cache miss");
    }

    pub fn record_success(&self, cache_key: &str, latency: Duration) {
        self.counters
            .lock()
            .observe_latency(latency.as_secs_f64() * 1000.0);
        info!(
            cache_key,
            outcome = "SUCCESS",
            elapsed_ms = latency.as_millis() as u64,
            "Search completed"
        );
        self.emit(SearchEventKind::Success, cache_key, latency, None);
    }

    pub fn record_error(&self, cache_key: &str, error: &SearchError, elapsed: Duration) {
        self.counters.lock().errors += 1;

        let detail = describe(error);
        warn!(
            cache_key,
            outcome = "ERROR",
            elapsed_ms = elapsed.as_millis() as u64,
            error = %detail,
            "Search failed"
        );
        self.emit(SearchEventKind::Error, cache_key, elapsed, Some(detail));
    }

    /// Raw counters
    pub fn counters(&self) -> AnalyticsCounters {
        self.counters.lock().clone()
    }

    /// Counters plus derived rates
    pub fn snapshot(&self, cache_size: usize, in_flight: usize) -> PerformanceMetrics {
        let counters = self.counters.lock();
        PerformanceMetrics {
            total_searches: counters.total_searches,
            cache_hits: counters.cache_hits,
            cache_misses: counters.cache_misses,
            errors: counters.errors,
            average_response_time_ms: counters.average_response_time_ms,
            last_search_at: counters.last_search_at,
            cache_hit_rate: counters.cache_hit_rate(),
            error_rate: counters.error_rate(),
            cache_size,
            in_flight,
        }
    }

    fn emit(
        &self,
        kind: SearchEventKind,
        cache_key: &str,
        latency: Duration,
        error: Option<String>,
    ) {
        let Some(sink) = &self.sink else {
            return;
        };

        let event = SearchEvent {
            kind,
            cache_key: cache_key.to_string(),
            latency,
            timestamp: Utc::now(),
            error,
        };

        match catch_unwind(AssertUnwindSafe(|| sink.record(&event))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!(error = %e, "Analytics sink rejected event"),
            Err(_) => debug!("Analytics sink panicked; event dropped"),
        }
    }
}

/// Error message followed by its classified cause, if any
fn describe(error: &SearchError) -> String {
    let root = error.root_cause();
    if std::ptr::eq(root, error) {
        error.to_string()
    } else {
        format!("{} (caused by: {})", error, root)
    }
}
