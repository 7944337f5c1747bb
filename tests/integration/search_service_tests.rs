//! Search service integration tests
//!
//! Runs `SearchService` end to end over HTTP. `expect(n)` on each mock
//! asserts how many requests actually reached the backend.

#[cfg(test)]
mod tests {
    use crate::common::{MockBackend, fixtures};
    use physio_search::core::client::endpoints;
    use physio_search::models::SearchFilters;
    use physio_search::{SearchError, SearchService};
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    async fn mount_search(mock: &MockBackend, query: &str, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .and(query_param("query", query))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::search_page(
                        vec![
                            fixtures::physiotherapist("p1", "Dr. Mehta"),
                            fixtures::physiotherapist("p2", "Dr. Kulkarni"),
                        ],
                        30,
                    ))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(expected_calls)
            .mount(&mock.server)
            .await;
    }

    #[tokio::test]
    async fn test_search_round_trip_and_cache() {
        let mock = MockBackend::start().await;
        mount_search(&mock, "knee", 1).await;

        let service = SearchService::new(mock.config()).unwrap();
        let filters = SearchFilters::new("knee");

        let first = service.search(&filters).await.unwrap();
        assert_eq!(first.results.len(), 2);
        assert_eq!(first.pagination.total, 30);
        assert_eq!(first.pagination.total_pages, 3);
        assert!(first.pagination.has_next);
        assert!(!first.pagination.has_prev);
        assert_eq!(first.applied_filters, filters);
        assert!(first.execution_time >= Duration::from_millis(100));

        let second = service.search(&filters).await.unwrap();
        assert_eq!(second, first);

        let metrics = service.performance_metrics();
        assert_eq!(metrics.total_searches, 2);
        assert_eq!(metrics.cache_hits, 1);
        assert_eq!(metrics.cache_size, 1);
    }

    #[tokio::test]
    async fn test_sparse_results_are_normalised() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::search_page(
                vec![
                    fixtures::physiotherapist("p1", "Dr. Mehta"),
                    fixtures::sparse_physiotherapist(1042),
                ],
                2,
            )))
            .expect(1)
            .mount(&mock.server)
            .await;

        let service = SearchService::new(mock.config()).unwrap();
        let response = service.search(&SearchFilters::new("knee")).await.unwrap();

        assert_eq!(response.results.len(), 2);
        let sparse = &response.results[1];
        assert_eq!(sparse.id, "1042");
        assert_eq!(sparse.rating, 0.0);
        assert_eq!(sparse.review_count, 0);
        assert!(sparse.specializations.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_searches_hit_backend_once() {
        let mock = MockBackend::start().await;
        mount_search(&mock, "sciatica", 1).await;

        let service = Arc::new(SearchService::new(mock.config()).unwrap());
        let filters = SearchFilters::new("sciatica");

        let handles: Vec<_> = (0..5)
            .map(|_| {
                let service = Arc::clone(&service);
                let filters = filters.clone();
                tokio::spawn(async move { service.search(&filters).await })
            })
            .collect();

        let mut search_ids = Vec::new();
        for handle in handles {
            search_ids.push(handle.await.unwrap().unwrap().search_id);
        }

        search_ids.dedup();
        assert_eq!(search_ids.len(), 1);
        assert_eq!(service.performance_metrics().in_flight, 0);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_user_message() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::search_page(vec![], 0))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock.server)
            .await;

        let mut config = mock.config();
        config.search.api.timeout_secs = 1;
        let service = SearchService::new(config).unwrap();

        let err = service.search(&SearchFilters::new("slow")).await.unwrap_err();
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "Search is taking longer than expected. Please try again."
        );
        assert_eq!(service.performance_metrics().errors, 1);
    }

    #[tokio::test]
    async fn test_server_error_surfaces_user_message() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SEARCH)))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&mock.server)
            .await;

        let service = SearchService::new(mock.config()).unwrap();
        let filters = SearchFilters::new("x");

        let err = service.search(&filters).await.unwrap_err();
        assert_eq!(err.to_string(), "Server error. Please try again later.");
        assert!(matches!(
            err.root_cause(),
            SearchError::ServerError { status: 500, .. }
        ));

        // Failures are not cached
        assert!(service.search(&filters).await.is_err());
    }

    #[tokio::test]
    async fn test_enhancements_degrade_when_backend_is_down() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock.server)
            .await;

        let service = SearchService::new(mock.config()).unwrap();

        assert!(service.get_featured(None, None).await.is_empty());
        assert!(service.get_location_suggestions("Pune", None).await.is_empty());
        assert_eq!(service.get_specializations().await.len(), 8);
    }

    #[tokio::test]
    async fn test_specializations_cached_across_calls() {
        let mock = MockBackend::start().await;
        Mock::given(method("GET"))
            .and(path(MockBackend::path(endpoints::SPECIALIZATIONS)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixtures::ok(serde_json::json!(["Sports Physiotherapy"]))),
            )
            .expect(1)
            .mount(&mock.server)
            .await;

        let service = SearchService::new(mock.config()).unwrap();
        assert_eq!(service.get_specializations().await, vec!["Sports Physiotherapy"]);
        assert_eq!(service.get_specializations().await, vec!["Sports Physiotherapy"]);
    }

    #[tokio::test]
    async fn test_warm_cache_then_clear() {
        let mock = MockBackend::start().await;
        mount_search(&mock, "knee", 2).await;
        mount_search(&mock, "back", 1).await;

        let service = SearchService::new(mock.config()).unwrap();
        let warmed = service
            .warm_cache(&[SearchFilters::new("knee"), SearchFilters::new("back")])
            .await;
        assert_eq!(warmed, 2);

        service.search(&SearchFilters::new("back")).await.unwrap();

        service.clear_cache();
        assert_eq!(service.performance_metrics().cache_size, 0);
        service.search(&SearchFilters::new("knee")).await.unwrap();
    }
}
