//! Top-level search service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Search service configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchServiceConfig {
    /// Remote backend configuration
    #[serde(default)]
    pub api: ApiConfig,
    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,
    /// Per-operation defaults
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SearchServiceConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.api = self.api.merge(other.api);
        self.cache = self.cache.merge(other.cache);
        self.defaults = self.defaults.merge(other.defaults);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
