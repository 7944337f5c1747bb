//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `api_validators`: Backend endpoint and timeout validation
//! - `cache_validators`: Cache, defaults and logging validation

mod api_validators;
mod cache_validators;
mod trait_def;

pub use trait_def::Validate;
