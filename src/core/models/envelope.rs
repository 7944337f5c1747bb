//! Backend response envelope

use super::response::PaginationMeta;
use crate::utils::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// JSON envelope wrapping every backend payload:
/// `{ success, data?, message?, pagination? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pagination: Option<BackendPagination>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            pagination: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: BackendPagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Unwrap the payload, turning a failure flag or a missing payload into
    /// [`SearchError::RequestFailed`]
    pub fn into_data(self) -> Result<(T, Option<BackendPagination>)> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok((data, self.pagination)),
            _ => Err(SearchError::request_failed(
                self.message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| "Search request failed".to_string()),
            )),
        }
    }
}

/// Pagination block as sent by the backend; every derived field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendPagination {
    pub total: u64,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(alias = "totalPages")]
    pub total_pages: Option<u32>,
    #[serde(alias = "hasNext")]
    pub has_next: Option<bool>,
    #[serde(alias = "hasPrev")]
    pub has_prev: Option<bool>,
}

impl BackendPagination {
    /// Fill the gaps left by the backend using the requested page and limit
    pub fn normalize(&self, requested_page: u32, requested_limit: u32) -> PaginationMeta {
        let page = self.page.unwrap_or(requested_page);
        let limit = self.limit.unwrap_or(requested_limit);
        let derived = PaginationMeta::from_totals(self.total, page, limit);

        let total_pages = self.total_pages.unwrap_or(derived.total_pages);
        PaginationMeta {
            total_pages,
            has_next: self.has_next.unwrap_or(derived.page < total_pages),
            has_prev: self.has_prev.unwrap_or(derived.has_prev),
            ..derived
        }
    }
}
