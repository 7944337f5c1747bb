//! Backend API configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use url::Url;

/// Upper bound for the per-call timeout, in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base URL '{}': {}", self.base_url, e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if url.query().is_some() {
            return Err("Base URL must not carry a query string".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(format!(
                "Request timeout must not exceed {} seconds",
                MAX_TIMEOUT_SECS
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}
