//! Configuration management for the search service
//!
//! This module handles loading, validation, and merging of the search service
//! configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{Result, SearchError};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Prefix shared by every environment variable the service reads
pub const ENV_PREFIX: &str = "PHYSIO_SEARCH_";

/// Main configuration struct for the search service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Search service configuration
    pub search: SearchServiceConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SearchError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let search: SearchServiceConfig = serde_yaml::from_str(content)
            .map_err(|e| SearchError::config(format!("Failed to parse config: {}", e)))?;

        let config = Self { search };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment overrides from {:?}", path);
        }

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from `PHYSIO_SEARCH_*` key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|suffix| (suffix.to_string(), value))
            })
            .collect();

        let mut search = SearchServiceConfig::default();

        if let Some(base_url) = vars.get("BASE_URL") {
            search.api.base_url = base_url.clone();
        }
        if let Some(timeout) = parse_var(&vars, "TIMEOUT_SECS")? {
            search.api.timeout_secs = timeout;
        }
        if let Some(user_agent) = vars.get("USER_AGENT") {
            search.api.user_agent = user_agent.clone();
        }
        if let Some(ttl) = parse_var(&vars, "CACHE_TTL_SECS")? {
            search.cache.ttl_secs = ttl;
        }
        if let Some(max_entries) = parse_var(&vars, "CACHE_MAX_ENTRIES")? {
            search.cache.max_entries = max_entries;
        }
        if let Some(ttl) = parse_var(&vars, "SPECIALIZATIONS_TTL_SECS")? {
            search.cache.specializations_ttl_secs = ttl;
        }
        if let Some(include_page) = parse_var(&vars, "INCLUDE_PAGE_IN_KEY")? {
            search.cache.include_page_in_key = include_page;
        }
        if let Some(limit) = parse_var(&vars, "FEATURED_LIMIT")? {
            search.defaults.featured_limit = limit;
        }
        if let Some(limit) = parse_var(&vars, "SUGGESTION_LIMIT")? {
            search.defaults.suggestion_limit = limit;
        }
        if let Some(len) = parse_var(&vars, "MIN_SUGGESTION_QUERY_LEN")? {
            search.defaults.min_suggestion_query_len = len;
        }
        if let Some(level) = vars.get("LOG_LEVEL") {
            search.logging.level = level.clone();
        }
        if let Some(json) = parse_var(&vars, "LOG_JSON")? {
            search.logging.json = json;
        }

        let config = Self { search };
        config.validate()?;
        Ok(config)
    }

    /// Get backend API configuration
    pub fn api(&self) -> &ApiConfig {
        &self.search.api
    }

    /// Get cache configuration
    pub fn cache(&self) -> &CacheConfig {
        &self.search.cache
    }

    /// Get per-operation defaults
    pub fn defaults(&self) -> &DefaultsConfig {
        &self.search.defaults
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.search.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.search
            .api
            .validate()
            .map_err(|e| SearchError::config(format!("API config error: {}", e)))?;

        self.search
            .cache
            .validate()
            .map_err(|e| SearchError::config(format!("Cache config error: {}", e)))?;

        self.search
            .defaults
            .validate()
            .map_err(|e| SearchError::config(format!("Defaults config error: {}", e)))?;

        self.search
            .logging
            .validate()
            .map_err(|e| SearchError::config(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.search = self.search.merge(other.search);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.search)
            .map_err(|e| SearchError::config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_var<T>(vars: &HashMap<String, String>, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    vars.get(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| {
                SearchError::config(format!("Invalid {}{}: {}", ENV_PREFIX, name, e))
            })
        })
        .transpose()
}
