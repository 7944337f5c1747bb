//! Timeout-bounded remote search client

use super::backend::SearchBackend;
use super::params::SearchParams;
use crate::core::models::{
    LocationSuggestion, PaginationMeta, PhysiotherapistSummary, SearchFilters, SearchResponse,
};
use crate::utils::error::{Result, SearchError};
use chrono::Local;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Default hard timeout per backend call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Single-call client with a hard timeout
///
/// No retries happen here. When the timeout wins the race the backend future
/// is dropped, which for [`super::HttpSearchBackend`] aborts the request.
#[derive(Clone)]
pub struct RemoteSearchClient {
    backend: Arc<dyn SearchBackend>,
    timeout: Duration,
}

impl RemoteSearchClient {
    pub fn new(backend: Arc<dyn SearchBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run one search and normalise the response
    ///
    /// `search_id` is echoed back on the response; it is the cache key the
    /// orchestrator stores the response under.
    pub async fn search(&self, filters: &SearchFilters, search_id: &str) -> Result<SearchResponse> {
        let started = Instant::now();
        let params = SearchParams::from_filters(filters, Local::now().date_naive());

        let envelope = self.bounded(self.backend.search(&params)).await?;
        let (results, pagination) = envelope.into_data()?;

        let pagination = match pagination {
            Some(pagination) => pagination.normalize(filters.page, filters.limit),
            None => PaginationMeta::from_totals(results.len() as u64, filters.page, filters.limit),
        };

        let execution_time = started.elapsed();
        debug!(
            cache_key = search_id,
            results = results.len(),
            elapsed_ms = execution_time.as_millis() as u64,
            "Search backend call completed"
        );

        Ok(SearchResponse {
            results,
            pagination,
            search_id: search_id.to_string(),
            execution_time,
            applied_filters: filters.clone(),
        })
    }

    pub async fn featured(
        &self,
        location: Option<&str>,
        limit: u32,
    ) -> Result<Vec<PhysiotherapistSummary>> {
        let envelope = self
            .bounded(self.backend.featured(location.map(str::to_string), limit))
            .await?;
        Ok(envelope.into_data()?.0)
    }

    pub async fn location_suggestions(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<LocationSuggestion>> {
        let envelope = self
            .bounded(self.backend.location_suggestions(query, limit))
            .await?;
        Ok(envelope.into_data()?.0)
    }

    pub async fn specializations(&self) -> Result<Vec<String>> {
        let envelope = self.bounded(self.backend.specializations()).await?;
        Ok(envelope.into_data()?.0)
    }

    /// Race `call` against the configured timeout
    async fn bounded<T, F>(&self, call: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| SearchError::Timeout(self.timeout))?
    }
}
