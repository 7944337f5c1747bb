//! Per-operation defaults

use super::*;
use serde::{Deserialize, Serialize};

/// Limits applied when callers do not pass their own
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default = "default_featured_limit")]
    pub featured_limit: u32,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: u32,
    /// Location queries shorter than this never reach the backend
    #[serde(default = "default_min_suggestion_query_len")]
    pub min_suggestion_query_len: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            featured_limit: default_featured_limit(),
            suggestion_limit: default_suggestion_limit(),
            min_suggestion_query_len: default_min_suggestion_query_len(),
        }
    }
}

impl DefaultsConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.featured_limit != default_featured_limit() {
            self.featured_limit = other.featured_limit;
        }
        if other.suggestion_limit != default_suggestion_limit() {
            self.suggestion_limit = other.suggestion_limit;
        }
        if other.min_suggestion_query_len != default_min_suggestion_query_len() {
            self.min_suggestion_query_len = other.min_suggestion_query_len;
        }
        self
    }
}
