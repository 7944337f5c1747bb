//! Type conversions for SearchError

use super::types::SearchError;

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return SearchError::from_status(status.as_u16(), err.to_string());
        }

        if err.is_decode() {
            return SearchError::Serialization(err.to_string());
        }

        if err.is_builder() {
            return SearchError::Config(err.to_string());
        }

        // Everything without a status never reached an HTTP response:
        // connect, DNS, TLS, reset and body transfer failures.
        SearchError::NetworkUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for SearchError {
    fn from(err: serde_yaml::Error) -> Self {
        SearchError::Config(err.to_string())
    }
}

impl From<url::ParseError> for SearchError {
    fn from(err: url::ParseError) -> Self {
        SearchError::Config(format!("Invalid URL: {}", err))
    }
}
