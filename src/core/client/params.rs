//! Filter to query parameter mapping

use crate::core::models::{Availability, SearchFilters, ServiceType};
use chrono::NaiveDate;
use serde::Serialize;

/// Query parameters for the backend search endpoint
///
/// Every optional field is omitted from the wire when `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<&'static str>,
    pub page: u32,
    pub limit: u32,
}

impl SearchParams {
    /// Build backend parameters from caller filters
    ///
    /// `today` is the caller's local calendar day and is only used for
    /// [`Availability::Today`].
    pub fn from_filters(filters: &SearchFilters, today: NaiveDate) -> Self {
        let available_date = match filters.availability {
            Availability::Today => Some(today),
            Availability::SpecificDate => filters.specific_date,
            Availability::All | Availability::ThisWeek => None,
        };

        let (sort_by, sort_order) = match filters.sort_by.sort_params() {
            Some((by, order)) => (Some(by), Some(order)),
            None => (None, None),
        };

        Self {
            query: non_empty(&filters.query),
            location: non_empty(&filters.location),
            specialization: non_empty(&filters.specialization),
            service_type: (filters.service_type != ServiceType::All)
                .then_some(filters.service_type),
            available_date,
            min_rating: (filters.min_rating > 0.0).then_some(filters.min_rating),
            max_price: filters.max_price,
            sort_by,
            sort_order,
            page: filters.page,
            limit: filters.limit,
        }
    }

    /// Ordered `(name, value)` pairs as sent on the wire
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(11);

        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(specialization) = &self.specialization {
            pairs.push(("specialization", specialization.clone()));
        }
        if let Some(service_type) = self.service_type {
            pairs.push(("service_type", service_type.as_str().to_string()));
        }
        if let Some(date) = self.available_date {
            pairs.push(("available_date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(min_rating) = self.min_rating {
            pairs.push(("min_rating", min_rating.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price", max_price.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.to_string()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sort_order", sort_order.to_string()));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.limit.to_string()));

        pairs
    }
}

/// Trimmed text, or `None` when nothing is left
fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
