//! reqwest-backed search transport

use super::backend::SearchBackend;
use super::params::SearchParams;
use crate::config::ApiConfig;
use crate::core::models::{ApiEnvelope, LocationSuggestion, PhysiotherapistSummary};
use crate::utils::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Endpoint paths, relative to the configured base URL
pub mod endpoints {
    pub const SEARCH: &str = "physiotherapists/search";
    pub const FEATURED: &str = "physiotherapists/featured";
    pub const LOCATION_SUGGESTIONS: &str = "locations/suggestions";
    pub const SPECIALIZATIONS: &str = "specializations";
}

const POOL_MAX_IDLE_PER_HOST: usize = 16;
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const TCP_KEEPALIVE: Duration = Duration::from_secs(60);

/// Longest error body excerpt carried into an error message
const MAX_ERROR_BODY: usize = 512;

/// HTTP implementation of [`SearchBackend`]
///
/// The overall request deadline is enforced by
/// [`super::RemoteSearchClient`]; this client only bounds connection setup.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: Client,
    base_url: String,
}

impl HttpSearchBackend {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .tcp_keepalive(TCP_KEEPALIVE)
            .tcp_nodelay(true)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SearchError::config(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_client(client, &config.base_url)
    }

    /// Use a preconfigured reqwest client
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Url::parse(base_url)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_envelope<T>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<ApiEnvelope<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(url = %url, params = ?query, "Calling search backend");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Request failed").to_string());
            warn!(url = %url, status = status.as_u16(), "Search backend returned an error status");
            return Err(SearchError::from_status(status.as_u16(), message));
        }

        Ok(response.json::<ApiEnvelope<T>>().await?)
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        let message = json
            .get("message")
            .and_then(|m| m.as_str())
            .or_else(|| json.get("error").and_then(|e| e.get("message")).and_then(|m| m.as_str()))
            .or_else(|| json.get("error").and_then(|e| e.as_str()));
        if let Some(message) = message {
            return Some(message.to_string());
        }
    }

    Some(body.chars().take(MAX_ERROR_BODY).collect())
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(
        &self,
        params: &SearchParams,
    ) -> Result<ApiEnvelope<Vec<PhysiotherapistSummary>>> {
        self.get_envelope(endpoints::SEARCH, &params.to_query_pairs())
            .await
    }

    async fn featured(
        &self,
        location: Option<String>,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<PhysiotherapistSummary>>> {
        let mut query = Vec::with_capacity(2);
        if let Some(location) = location {
            query.push(("location", location));
        }
        query.push(("limit", limit.to_string()));

        self.get_envelope(endpoints::FEATURED, &query).await
    }

    async fn location_suggestions(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<ApiEnvelope<Vec<LocationSuggestion>>> {
        let params = [("query", query.to_string()), ("limit", limit.to_string())];
        self.get_envelope(endpoints::LOCATION_SUGGESTIONS, &params)
            .await
    }

    async fn specializations(&self) -> Result<ApiEnvelope<Vec<String>>> {
        self.get_envelope(endpoints::SPECIALIZATIONS, &[]).await
    }
}
