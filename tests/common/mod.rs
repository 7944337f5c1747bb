//! Common test utilities for physio-search
//!
//! - JSON fixtures shaped like the backend envelope
//! - [`MockBackend`], a `wiremock` server plus a config pointing at it

pub mod fixtures;

use physio_search::Config;
use physio_search::config::ApiConfig;
use wiremock::MockServer;

/// Prefix the backend mounts its API under
pub const API_PREFIX: &str = "/api";

/// A running mock backend
pub struct MockBackend {
    pub server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), API_PREFIX)
    }

    /// Full request path of an endpoint, for `wiremock::matchers::path`
    pub fn path(endpoint: &str) -> String {
        format!("{}/{}", API_PREFIX, endpoint)
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url(),
            ..ApiConfig::default()
        }
    }

    /// Default configuration aimed at this server
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.search.api = self.api_config();
        config
    }
}
