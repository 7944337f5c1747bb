//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use physio_search::{Config, SearchError, SearchService};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_service_from_config_file() {
        let file = write_config(
            r#"
api:
  base_url: "https://search.example.com/api"
  timeout_secs: 5
cache:
  ttl_secs: 120
  max_entries: 50
  include_page_in_key: true
defaults:
  featured_limit: 4
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.api().base_url, "https://search.example.com/api");
        assert_eq!(config.cache().max_entries, 50);
        assert!(config.cache().include_page_in_key);
        assert_eq!(config.defaults().featured_limit, 4);
        assert_eq!(config.defaults().suggestion_limit, 5);

        let service = SearchService::new(config).unwrap();
        assert_eq!(service.cache_stats().capacity, 50);
        assert_eq!(service.config().api.timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_invalid_config_file_is_rejected() {
        let file = write_config("api:\n  base_url: \"ftp://search.example.com\"\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let err = Config::from_file("/nonexistent/physio-search.yaml")
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Config(msg) if msg.contains("Failed to read")));
    }
}
