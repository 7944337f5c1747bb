//! Remote search client
//!
//! [`SearchParams`] maps filters to backend query parameters,
//! [`SearchBackend`] is the transport seam (with [`HttpSearchBackend`] as the
//! reqwest implementation) and [`RemoteSearchClient`] adds the hard timeout
//! and response normalisation on top.

pub mod backend;
pub mod http;
pub mod params;
pub mod remote;


pub use backend::SearchBackend;
pub use http::{HttpSearchBackend, endpoints};
pub use params::SearchParams;
pub use remote::{DEFAULT_TIMEOUT, RemoteSearchClient};

#[cfg(test)]
pub use backend::MockSearchBackend;
