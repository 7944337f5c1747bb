//! Search filter value types

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default page size for search results
pub const DEFAULT_PAGE_LIMIT: u32 = 12;

/// Prefix of every search cache key
pub const SEARCH_KEY_PREFIX: &str = "search_";

/// Where the consultation takes place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceType {
    #[default]
    All,
    HomeVisit,
    Online,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::HomeVisit => "HOME_VISIT",
            Self::Online => "ONLINE",
        }
    }
}

/// Availability window requested by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    #[default]
    All,
    Today,
    ThisWeek,
    SpecificDate,
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortBy {
    #[default]
    Relevance,
    Rating,
    Price,
    Distance,
}

impl SortBy {
    /// Backend `(sort_by, sort_order)` pair; `None` keeps the backend default
    pub fn sort_params(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Relevance => None,
            Self::Rating => Some(("rating", "desc")),
            Self::Price => Some(("price", "asc")),
            Self::Distance => Some(("distance", "asc")),
        }
    }
}

/// Filters for a single physiotherapist search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    /// Free-text query (name, clinic, condition)
    pub query: String,
    pub location: String,
    pub specialization: String,
    pub service_type: ServiceType,
    pub availability: Availability,
    /// Only meaningful with [`Availability::SpecificDate`]
    pub specific_date: Option<NaiveDate>,
    /// Minimum average rating; `0` disables the filter
    pub min_rating: f64,
    pub max_price: Option<f64>,
    pub sort_by: SortBy,
    pub page: u32,
    pub limit: u32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            location: String::new(),
            specialization: String::new(),
            service_type: ServiceType::All,
            availability: Availability::All,
            specific_date: None,
            min_rating: 0.0,
            max_price: None,
            sort_by: SortBy::Relevance,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl SearchFilters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = specialization.into();
        self
    }

    pub fn with_service_type(mut self, service_type: ServiceType) -> Self {
        self.service_type = service_type;
        self
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Restrict to a specific calendar date
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.availability = Availability::SpecificDate;
        self.specific_date = Some(date);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating.max(0.0);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn sorted_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Stable cache key for these filters
    ///
    /// The key is the base64 encoding of a canonical JSON rendering with a
    /// fixed field order. Text fields are trimmed, matching what is sent to
    /// the backend. `page` only takes part when `include_page` is set;
    /// otherwise every page of the same query maps to one key.
    pub fn cache_key(&self, include_page: bool) -> String {
        let canonical = CanonicalFilters {
            query: self.query.trim(),
            location: self.location.trim(),
            specialization: self.specialization.trim(),
            service_type: self.service_type,
            availability: self.availability,
            specific_date: self.specific_date,
            min_rating: self.min_rating,
            max_price: self.max_price,
            sort_by: self.sort_by,
            limit: self.limit,
            page: include_page.then_some(self.page),
        };

        let json = serde_json::to_string(&canonical).unwrap_or_else(|_| format!("{:?}", canonical));
        format!("{}{}", SEARCH_KEY_PREFIX, STANDARD.encode(json))
    }
}

/// Field order here is the cache key format; do not reorder.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CanonicalFilters<'a> {
    query: &'a str,
    location: &'a str,
    specialization: &'a str,
    service_type: ServiceType,
    availability: Availability,
    specific_date: Option<NaiveDate>,
    min_rating: f64,
    max_price: Option<f64>,
    sort_by: SortBy,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
}
