//! Search response types

use super::filters::SearchFilters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Postal address of a practice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line: Option<String>,
    pub area: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(alias = "pincode", alias = "postalCode")]
    pub postal_code: Option<String>,
}

/// Consultation fees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fees {
    #[serde(alias = "consultationFee", alias = "clinic")]
    pub consultation: Option<f64>,
    #[serde(alias = "homeVisitFee", alias = "home_visit_fee")]
    pub home_visit: Option<f64>,
}

/// One search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysiotherapistSummary {
    /// Backend ids may arrive as strings or numbers
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub specializations: Vec<String>,
    #[serde(
        alias = "experienceYears",
        alias = "experience",
        deserialize_with = "lenient::null_as_default"
    )]
    pub experience_years: u32,
    #[serde(deserialize_with = "lenient::null_as_default")]
    pub rating: f64,
    #[serde(
        alias = "reviewCount",
        alias = "total_reviews",
        deserialize_with = "lenient::null_as_default"
    )]
    pub review_count: u32,
    pub address: Option<Address>,
    pub fees: Option<Fees>,
    #[serde(alias = "photoUrl", alias = "profile_photo")]
    pub photo_url: Option<String>,
    pub bio: Option<String>,
    #[serde(alias = "isVerified", deserialize_with = "lenient::null_as_default")]
    pub is_verified: bool,
    #[serde(alias = "isAvailable", deserialize_with = "lenient::null_as_default")]
    pub is_available: bool,
}

/// Pagination metadata returned with every search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Derive page counts and navigation flags from `total`, `page` and `limit`
    pub fn from_totals(total: u64, page: u32, limit: u32) -> Self {
        let page = page.max(1);
        let total_pages = if limit == 0 {
            0
        } else {
            u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
        };

        Self {
            total,
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Result of [`crate::core::search::SearchService::search`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<PhysiotherapistSummary>,
    pub pagination: PaginationMeta,
    /// Cache key of the request that produced this response
    pub search_id: String,
    /// Wall-clock time of the backend call
    pub execution_time: Duration,
    pub applied_filters: SearchFilters,
}

/// Location autocomplete entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationSuggestion {
    #[serde(
        alias = "name",
        alias = "description",
        deserialize_with = "lenient::null_as_default"
    )]
    pub label: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Deserializers that turn `null` and loosely typed values into defaults
///
/// One malformed result must not fail the whole page.
mod lenient {
    use serde::{Deserialize, Deserializer};

    pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number),
    }

    pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
            Some(StringOrNumber::String(value)) => value,
            Some(StringOrNumber::Number(value)) => value.to_string(),
            None => String::new(),
        })
    }
}
