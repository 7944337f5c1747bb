//! Core data models for the search service
//!
//! This module defines the search filters sent by callers, the response
//! shapes returned to them, and the JSON envelope the backend speaks.

pub mod envelope;
pub mod filters;
pub mod response;

pub use envelope::{ApiEnvelope, BackendPagination};
pub use filters::{Availability, SearchFilters, ServiceType, SortBy};
pub use response::{
    Address, Fees, LocationSuggestion, PaginationMeta, PhysiotherapistSummary, SearchResponse,
};
