//! # physio-search
//!
//! Client-side search request orchestration for a physiotherapy marketplace.
//!
//! ## Features
//!
//! - **Response Cache**: TTL-bounded cache keyed by a canonical form of the search filters
//! - **Request Deduplication**: Concurrent identical searches share a single backend call
//! - **Hard Timeouts**: Every backend call is raced against a configurable deadline
//! - **Graceful Degradation**: Featured listings, suggestions and specializations never fail
//! - **Analytics**: Hit/miss/error counters, moving-average latency and an event sink hook
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use physio_search::{Config, SearchService};
//! use physio_search::models::{SearchFilters, SortBy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     physio_search::init_logging(config.logging())?;
//!
//!     let service = SearchService::new(config)?;
//!
//!     let filters = SearchFilters::new("knee rehabilitation")
//!         .with_location("Pune")
//!         .sorted_by(SortBy::Rating);
//!     let response = service.search(&filters).await?;
//!
//!     println!("{} results", response.pagination.total);
//!     println!("{:?}", service.performance_metrics());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use crate::core::analytics::{AnalyticsSink, PerformanceMetrics, SearchEvent, SearchEventKind};
pub use crate::core::client::{HttpSearchBackend, SearchBackend};
pub use crate::core::models;
pub use crate::core::search::SearchService;
pub use utils::error::{Result, SearchError};
pub use utils::logging::init_logging;

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
