//! Helper functions for creating and classifying errors

use super::types::SearchError;

pub(crate) const TIMEOUT_MESSAGE: &str = "Search is taking longer than expected. Please try again.";
pub(crate) const NETWORK_MESSAGE: &str = "Please check your internet connection and try again.";
pub(crate) const RATE_LIMIT_MESSAGE: &str =
    "Too many requests. Please wait a moment and try again.";
pub(crate) const SERVER_MESSAGE: &str = "Server error. Please try again later.";
pub(crate) const DEFAULT_MESSAGE: &str = "Search failed. Please try again.";

impl SearchError {
    pub fn request_failed<S: Into<String>>(message: S) -> Self {
        Self::RequestFailed(message.into())
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::NetworkUnavailable(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            429 => Self::RateLimited(message),
            500..=599 => Self::ServerError { status, message },
            _ => Self::Http { status, message },
        }
    }

    /// Wrap this error into the form returned by `SearchService::search`
    pub fn into_search_failed(self) -> Self {
        match self {
            Self::SearchFailed { .. } => self,
            other => Self::SearchFailed {
                message: other.user_message().to_string(),
                cause: Some(Box::new(other)),
            },
        }
    }

    /// Message suitable for showing to an end user
    pub fn user_message(&self) -> &str {
        match self {
            Self::Timeout(_) => TIMEOUT_MESSAGE,
            Self::NetworkUnavailable(_) => NETWORK_MESSAGE,
            Self::RateLimited(_) => RATE_LIMIT_MESSAGE,
            Self::ServerError { .. } => SERVER_MESSAGE,
            Self::SearchFailed { message, .. } => message,
            _ => DEFAULT_MESSAGE,
        }
    }

    /// The classified failure behind a `SearchFailed`, or `self` otherwise
    pub fn root_cause(&self) -> &SearchError {
        match self {
            Self::SearchFailed {
                cause: Some(cause), ..
            } => cause.root_cause(),
            other => other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.root_cause(), Self::Timeout(_))
    }

    /// Whether retrying the same request later could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::Timeout(_)
                | Self::NetworkUnavailable(_)
                | Self::RateLimited(_)
                | Self::ServerError { .. }
        )
    }
}
