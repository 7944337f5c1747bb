//! Backend transport trait

use super::params::SearchParams;
use crate::core::models::{ApiEnvelope, LocationSuggestion, PhysiotherapistSummary};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Transport to the remote search API
///
/// Implementations perform exactly one call per method invocation and return
/// the decoded envelope. Transport and HTTP status failures are reported as
/// classified [`crate::SearchError`]s; envelope-level failures (`success:
/// false`) are returned as-is for the caller to interpret.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Paginated physiotherapist search
    async fn search(&self, params: &SearchParams)
    -> Result<ApiEnvelope<Vec<PhysiotherapistSummary>>>;

    /// Featured physiotherapists, optionally near `location`
    async fn featured(
        &self,
        location: Option<String>,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<PhysiotherapistSummary>>>;

    /// Location autocomplete
    async fn location_suggestions(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<LocationSuggestion>>>;

    /// Names of all specializations offered on the marketplace
    async fn specializations(&self) -> Result<ApiEnvelope<Vec<String>>>;
}
