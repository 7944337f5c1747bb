//! HTTP backend integration tests
//!
//! Verifies the query parameters sent to each endpoint and how non-success
//! responses are classified.

#[cfg(test)]
mod tests {
    use crate::common::{MockBackend, fixtures};
    use chrono::NaiveDate;
    use physio_search::SearchError;
    use physio_search::config::ApiConfig;
    use physio_search::core::client::{HttpSearchBackend, SearchBackend, SearchParams, endpoints};
    use physio_search::models::{Availability, SearchFilters, ServiceType, SortBy};
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, ResponseTemplate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    async fn backend_for(mock: &MockBackend) -> HttpSearchBackend {
        HttpSearchBackend::new(&mock.api_config()).unwrap()
    }

    // ==================== Request mapping ====================

    #[tokio::test]
    async fn test_plain_query_sends_only_query_and_pagination() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .and(query_param("query", "Dr. Sharma"))
            .and(query_param("page", "1"))
            .and(query_param("limit", "12"))
            .and(query_param_is_missing("location"))
            .and(query_param_is_missing("service_type"))
            .and(query_param_is_missing("available_date"))
            .and(query_param_is_missing("min_rating"))
            .and(query_param_is_missing("sort_by"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::search_page(
                vec![fixtures::physiotherapist("p1", "Dr. Anita Sharma")],
                1,
            )))
            .expect(1)
            .mount(&mock.server)
            .await;

        let backend = backend_for(&mock).await;
        let params = SearchParams::from_filters(&SearchFilters::new("Dr. Sharma"), today());
        let envelope = backend.search(&params).await.unwrap();

        let (results, pagination) = envelope.into_data().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Dr. Anita Sharma");
        assert_eq!(results[0].experience_years, 8);
        assert_eq!(pagination.unwrap().total, 1);
    }

    #[tokio::test]
    async fn test_full_filter_mapping() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .and(query_param("location", "Pune"))
            .and(query_param("specialization", "Sports Physiotherapy"))
            .and(query_param("service_type", "HOME_VISIT"))
            .and(query_param("available_date", "2024-03-15"))
            .and(query_param("min_rating", "4"))
            .and(query_param("max_price", "1500"))
            .and(query_param("sort_by", "rating"))
            .and(query_param("sort_order", "desc"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "24"))
            .and(query_param_is_missing("query"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::search_page(vec![], 0)),
            )
            .expect(1)
            .mount(&mock.server)
            .await;

        let filters = SearchFilters::new("")
            .with_location("Pune")
            .with_specialization("Sports Physiotherapy")
            .with_service_type(ServiceType::HomeVisit)
            .with_availability(Availability::Today)
            .with_min_rating(4.0)
            .with_max_price(1500.0)
            .sorted_by(SortBy::Rating)
            .with_page(2)
            .with_limit(24);

        let backend = backend_for(&mock).await;
        let envelope = backend
            .search(&SearchParams::from_filters(&filters, today()))
            .await
            .unwrap();
        assert!(envelope.success);
    }

    #[tokio::test]
    async fn test_auxiliary_endpoints() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::FEATURED)))
            .and(query_param("location", "Mumbai"))
            .and(query_param("limit", "6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ok(
                serde_json::json!([fixtures::physiotherapist("f1", "Dr. Rao")]),
            )))
            .expect(1)
            .mount(&mock.server)
            .await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::LOCATION_SUGGESTIONS)))
            .and(query_param("query", "Pun"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ok(
                serde_json::json!([{ "label": "Pune, Maharashtra", "city": "Pune" }]),
            )))
            .expect(1)
            .mount(&mock.server)
            .await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SPECIALIZATIONS)))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::ok(
                serde_json::json!(["Sports Physiotherapy", "Manual Therapy"]),
            )))
            .expect(1)
            .mount(&mock.server)
            .await;

        let backend = backend_for(&mock).await;

        let featured = backend.featured(Some("Mumbai".to_string()), 6).await.unwrap();
        assert_eq!(featured.into_data().unwrap().0[0].id, "f1");

        let suggestions = backend.location_suggestions("Pun", 5).await.unwrap();
        let suggestions = suggestions.into_data().unwrap().0;
        assert_eq!(suggestions[0].label, "Pune, Maharashtra");
        assert_eq!(suggestions[0].city.as_deref(), Some("Pune"));

        let names = backend.specializations().await.unwrap().into_data().unwrap().0;
        assert_eq!(names, vec!["Sports Physiotherapy", "Manual Therapy"]);
    }

    // ==================== Error classification ====================

    async fn search_error(template: ResponseTemplate) -> SearchError {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .respond_with(template)
            .mount(&mock.server)
            .await;

        let backend = backend_for(&mock).await;
        backend
            .search(&SearchParams::from_filters(&SearchFilters::new("x"), today()))
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_rate_limit_status() {
        let err = search_error(
            ResponseTemplate::new(429).set_body_json(fixtures::failure("Too many requests")),
        )
        .await;
        assert_eq!(err, SearchError::RateLimited("Too many requests".to_string()));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let err = search_error(ResponseTemplate::new(503).set_body_string("maintenance")).await;
        assert_eq!(
            err,
            SearchError::ServerError {
                status: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_client_error_status() {
        let err = search_error(ResponseTemplate::new(404)).await;
        assert!(matches!(err, SearchError::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let err = search_error(ResponseTemplate::new(200).set_body_string("<html>")).await;
        assert!(matches!(err, SearchError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_failure_envelope_is_not_a_transport_error() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(fixtures::failure("Unknown location")),
            )
            .mount(&mock.server)
            .await;

        let backend = backend_for(&mock).await;
        let envelope = backend
            .search(&SearchParams::from_filters(&SearchFilters::new("x"), today()))
            .await
            .unwrap();
        assert_eq!(
            envelope.into_data().unwrap_err(),
            SearchError::RequestFailed("Unknown location".to_string())
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:1/api".to_string(),
            ..ApiConfig::default()
        };
        let backend = HttpSearchBackend::new(&config).unwrap();

        let err = backend
            .search(&SearchParams::from_filters(&SearchFilters::new("x"), today()))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::NetworkUnavailable(_)));
        assert!(err.is_transient());
    }
}
