//! Search analytics
//!
//! Process-lifetime counters, an exponentially weighted latency average and
//! one structured event per search outcome.

pub mod recorder;
pub mod types;


pub use recorder::{AnalyticsSink, SearchAnalytics};
pub use types::{AnalyticsCounters, PerformanceMetrics, SearchEvent, SearchEventKind};
