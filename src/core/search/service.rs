//! Search service

use super::fallback::fallback_specializations;
use crate::config::{Config, SearchServiceConfig};
use crate::core::analytics::{AnalyticsSink, PerformanceMetrics, SearchAnalytics};
use crate::core::cache_manager::{CacheStore, CacheStoreStats};
use crate::core::client::{HttpSearchBackend, RemoteSearchClient, SearchBackend};
use crate::core::dedup::{DedupOutcome, RequestDeduplicator};
use crate::core::models::{LocationSuggestion, PhysiotherapistSummary, SearchFilters, SearchResponse};
use crate::utils::error::Result;
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info, warn};

/// Namespace for cached featured listings
pub const FEATURED_KEY_PREFIX: &str = "featured_";

/// Cache key of the specialization list
pub const SPECIALIZATIONS_KEY: &str = "specializations";

/// Values sharing the service cache
///
/// Each namespace has its own key prefix, so a lookup only ever finds the
/// variant written under that prefix.
#[derive(Debug, Clone)]
pub(crate) enum CachedPayload {
    Search(SearchResponse),
    Featured(Vec<PhysiotherapistSummary>),
    Specializations(Vec<String>),
}

/// Client-side search orchestrator
///
/// Serves repeated searches from a TTL cache, collapses concurrent identical
/// searches into one backend call, bounds every call with a timeout and
/// records analytics for each attempt.
pub struct SearchService {
    config: SearchServiceConfig,
    pub(crate) cache: Arc<CacheStore<CachedPayload>>,
    pub(crate) dedup: RequestDeduplicator<SearchResponse>,
    analytics: Arc<SearchAnalytics>,
    client: Arc<RemoteSearchClient>,
}

impl SearchService {
    /// Create a service talking HTTP to the configured backend
    pub fn new(config: Config) -> Result<Self> {
        let backend = HttpSearchBackend::new(config.api())?;
        Self::with_backend(config, Arc::new(backend))
    }

    /// Create a service on top of any backend implementation
    pub fn with_backend(config: Config, backend: Arc<dyn SearchBackend>) -> Result<Self> {
        config.validate()?;
        let config = config.search;

        let cache = CacheStore::from_config(&config.cache)?;
        let client = RemoteSearchClient::new(backend, config.api.timeout());

        info!(
            cache_ttl_secs = config.cache.ttl_secs,
            cache_max_entries = config.cache.max_entries,
            timeout_secs = config.api.timeout_secs,
            "Search service initialized"
        );

        Ok(Self {
            config,
            cache: Arc::new(cache),
            dedup: RequestDeduplicator::new(),
            analytics: Arc::new(SearchAnalytics::new()),
            client: Arc::new(client),
        })
    }

    /// Forward analytics events to `sink`
    pub fn with_sink(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Arc::new(SearchAnalytics::with_sink(sink));
        self
    }

    pub fn config(&self) -> &SearchServiceConfig {
        &self.config
    }

    /// Run a search, from cache when possible
    ///
    /// Concurrent calls with the same cache key share one backend call and
    /// observe the same outcome. Failures come back as
    /// [`crate::SearchError::SearchFailed`] with the classified cause attached.
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse> {
        let started = Instant::now();
        let cache_key = filters.cache_key(self.config.cache.include_page_in_key);

        self.analytics.record_search_started();

        if let Some(CachedPayload::Search(response)) = self.cache.get(&cache_key) {
            self.analytics.record_cache_hit(&cache_key);
            return Ok(response);
        }

        let (request, outcome) = self
            .dedup
            .get_or_create(&cache_key, || self.fetch(filters.clone(), cache_key.clone()));

        match outcome {
            DedupOutcome::Shared => self.analytics.record_deduped(&cache_key),
            DedupOutcome::Started => self.analytics.record_cache_miss(&cache_key),
        }

        request.await.map_err(|err| {
            error!(
                cache_key = %cache_key,
                filters = ?filters,
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %err,
                "Search request failed"
            );
            err.into_search_failed()
        })
    }

    /// Backend call that settles the cache and analytics exactly once
    fn fetch(
        &self,
        filters: SearchFilters,
        cache_key: String,
    ) -> impl Future<Output = Result<SearchResponse>> + Send + 'static {
        let client = Arc::clone(&self.client);
        let cache = Arc::clone(&self.cache);
        let analytics = Arc::clone(&self.analytics);

        async move {
            let started = Instant::now();
            match client.search(&filters, &cache_key).await {
                Ok(response) => {
                    cache.put(cache_key.clone(), CachedPayload::Search(response.clone()));
                    analytics.record_success(&cache_key, started.elapsed());
                    Ok(response)
                }
                Err(err) => {
                    analytics.record_error(&cache_key, &err, started.elapsed());
                    Err(err)
                }
            }
        }
    }

    /// Featured physiotherapists, empty when the backend fails
    ///
    /// Counted by the analytics recorder like any other search, under its
    /// own cache key namespace.
    pub async fn get_featured(
        &self,
        location: Option<&str>,
        limit: Option<u32>,
    ) -> Vec<PhysiotherapistSummary> {
        let limit = limit.unwrap_or(self.config.defaults.featured_limit);
        let location = location.filter(|location| !location.is_empty());
        let cache_key = featured_key(location, limit);

        self.analytics.record_search_started();

        if let Some(CachedPayload::Featured(featured)) = self.cache.get(&cache_key) {
            self.analytics.record_cache_hit(&cache_key);
            return featured;
        }
        self.analytics.record_cache_miss(&cache_key);

        let started = Instant::now();
        match self.client.featured(location, limit).await {
            Ok(featured) => {
                self.analytics.record_success(&cache_key, started.elapsed());
                self.cache
                    .put(cache_key, CachedPayload::Featured(featured.clone()));
                featured
            }
            Err(err) => {
                self.analytics
                    .record_error(&cache_key, &err, started.elapsed());
                warn!(
                    cache_key = %cache_key,
                    location = location.unwrap_or("all"),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %err,
                    "Featured lookup failed; returning no results"
                );
                Vec::new()
            }
        }
    }

    /// Location autocomplete; never cached
    pub async fn get_location_suggestions(
        &self,
        query: &str,
        limit: Option<u32>,
    ) -> Vec<LocationSuggestion> {
        let query = query.trim();
        if query.chars().count() < self.config.defaults.min_suggestion_query_len {
            return Vec::new();
        }

        let limit = limit.unwrap_or(self.config.defaults.suggestion_limit);
        match self.client.location_suggestions(query, limit).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                warn!(query, error = %err, "Location suggestions failed; returning no results");
                Vec::new()
            }
        }
    }

    /// Known specializations, or a fixed list when the backend fails
    pub async fn get_specializations(&self) -> Vec<String> {
        if let Some(CachedPayload::Specializations(names)) = self.cache.get(SPECIALIZATIONS_KEY) {
            return names;
        }

        match self.client.specializations().await {
            Ok(names) => {
                self.cache.put_with_ttl(
                    SPECIALIZATIONS_KEY,
                    CachedPayload::Specializations(names.clone()),
                    self.config.cache.specializations_ttl(),
                );
                names
            }
            Err(err) => {
                warn!(error = %err, "Specializations lookup failed; using fallback list");
                fallback_specializations()
            }
        }
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("Search cache cleared");
    }

    /// Prefetch searches concurrently and return how many succeeded
    pub async fn warm_cache(&self, searches: &[SearchFilters]) -> usize {
        let outcomes = join_all(searches.iter().map(|filters| self.search(filters))).await;

        let mut warmed = 0;
        for (filters, outcome) in searches.iter().zip(outcomes) {
            match outcome {
                Ok(_) => warmed += 1,
                Err(err) => warn!(filters = ?filters, error = %err, "Cache warm-up search failed"),
            }
        }

        info!(requested = searches.len(), warmed, "Cache warm-up finished");
        warmed
    }

    /// Analytics snapshot with the current cache size
    pub fn performance_metrics(&self) -> PerformanceMetrics {
        self.analytics
            .snapshot(self.cache.len(), self.dedup.in_flight())
    }

    pub fn cache_stats(&self) -> CacheStoreStats {
        self.cache.stats()
    }
}

fn featured_key(location: Option<&str>, limit: u32) -> String {
    format!("{}{}_{}", FEATURED_KEY_PREFIX, location.unwrap_or("all"), limit)
}
