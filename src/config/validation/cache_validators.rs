//! Cache, defaults and logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl_secs == 0 {
            return Err("Cache TTL must be greater than 0".to_string());
        }

        if self.max_entries == 0 {
            return Err("Cache max entries must be greater than 0".to_string());
        }

        if self.specializations_ttl_secs == 0 {
            return Err("Specializations TTL must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for DefaultsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.featured_limit == 0 {
            return Err("Featured limit must be greater than 0".to_string());
        }

        if self.suggestion_limit == 0 {
            return Err("Suggestion limit must be greater than 0".to_string());
        }

        if self.min_suggestion_query_len == 0 {
            return Err("Minimum suggestion query length must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
