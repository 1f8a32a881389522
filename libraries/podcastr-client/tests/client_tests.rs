//! Tests for the episode API client.
//!
//! These tests use mock servers to verify client behavior without
//! requiring a real API.

use podcastr_client::{ClientConfig, ClientError, EpisodeSource, PodcastrClient};
use podcastr_core::Locale;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn record(id: &str, published_at: &str, duration: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Episode {}", id),
        "members": "Diego e Richard",
        "published_at": published_at,
        "thumbnail": format!("https://storage.example.com/{}.jpg", id),
        "description": "<p>Notes</p>",
        "file": {
            "url": format!("https://storage.example.com/{}.m4a", id),
            "type": "audio/x-m4a",
            "duration": duration
        }
    })
}

// =============================================================================
// Client Creation Tests
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(PodcastrClient::new(ClientConfig::new("http://localhost:3333")).is_ok());
        assert!(PodcastrClient::new(ClientConfig::new("https://api.example.com/v1/")).is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        match PodcastrClient::new(ClientConfig::new("  ")).unwrap_err() {
            ClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = PodcastrClient::new(ClientConfig::new("ftp://example.com"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_unparseable_url_rejected() {
        let result = PodcastrClient::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}

// =============================================================================
// Episode List Tests
// =============================================================================

mod list_episodes {
    use super::*;

    #[tokio::test]
    async fn test_requests_newest_first_with_limit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "12"))
            .and(query_param("_sort", "published_at"))
            .and(query_param("_order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                record("b", "2021-01-22 19:00:00", json!(3981)),
                record("a", "2021-01-08 16:23:39", json!("1842")),
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = PodcastrClient::new(ClientConfig::new(server.uri())).unwrap();
        let episodes = client.list_episodes(12).await.unwrap();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].id, "b");
        assert_eq!(episodes[1].file.duration, 1842);

        let episode = episodes[1].to_episode(Locale::PtBr).unwrap();
        assert_eq!(episode.published_at.as_deref(), Some("8 jan 21"));
    }

    #[tokio::test]
    async fn test_server_error_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = PodcastrClient::new(ClientConfig::new(server.uri())).unwrap();
        let err = client.list_episodes(5).await.unwrap_err();

        match &err {
            ClientError::ServerError { status, message } => {
                assert_eq!(*status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("Expected ServerError, got {:?}", other),
        }
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"episodes": []})))
            .mount(&server)
            .await;

        let client = PodcastrClient::new(ClientConfig::new(server.uri())).unwrap();
        let err = client.list_episodes(5).await.unwrap_err();

        assert!(matches!(err, ClientError::ParseError(_)));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn test_unreachable_api() {
        // Nothing listens on port 9 locally
        let client = PodcastrClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        let err = client.list_episodes(5).await.unwrap_err();

        assert!(matches!(err, ClientError::ServerUnreachable(_)));
        assert!(err.is_transient());
    }
}

// =============================================================================
// Episode Detail Tests
// =============================================================================

mod get_episode {
    use super::*;

    #[tokio::test]
    async fn test_fetches_single_episode() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/a-importancia-da-contribuicao"))
            .respond_with(ResponseTemplate::new(200).set_body_json(record(
                "a-importancia-da-contribuicao",
                "2021-01-22 19:00:00",
                json!(3981),
            )))
            .mount(&server)
            .await;

        let client = PodcastrClient::new(ClientConfig::new(server.uri())).unwrap();
        let record = client.get_episode("a-importancia-da-contribuicao").await.unwrap();

        assert_eq!(record.description, "<p>Notes</p>");
        assert_eq!(record.file.mime_type.as_deref(), Some("audio/x-m4a"));
    }

    #[tokio::test]
    async fn test_missing_episode_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = PodcastrClient::new(ClientConfig::new(server.uri())).unwrap();
        let err = client.get_episode("nope").await.unwrap_err();

        match err {
            ClientError::NotFound(id) => assert_eq!(id, "nope"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_source_trait_delegates_to_client() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/episodes"))
            .and(query_param("_limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([record(
                "a",
                "2021-01-08",
                json!(60)
            )])))
            .mount(&server)
            .await;

        let client = PodcastrClient::new(ClientConfig::new(server.uri())).unwrap();
        let source: &dyn EpisodeSource = &client;

        let records = source.latest_episodes(2).await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
