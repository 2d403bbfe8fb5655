//! Tests for the HTTP client module

use super::*;
use crate::auth::SswsToken;
use crate::error::Error;
use test_case::test_case;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Status classifier
// ============================================================================

#[test_case(199, false; "just below the range")]
#[test_case(200, true; "lower bound")]
#[test_case(204, true; "no content")]
#[test_case(299, true; "upper bound")]
#[test_case(300, false; "just above the range")]
#[test_case(404, false; "client error")]
#[test_case(500, false; "server error")]
fn test_is_success(status: u16, expected: bool) {
    assert_eq!(is_success(status), expected);
}

// ============================================================================
// Host header derivation
// ============================================================================

#[test]
fn test_host_header_plain() {
    let url = Url::parse("https://example.okta.com/api/v1/users?limit=200").unwrap();
    assert_eq!(host_header(&url).unwrap(), "example.okta.com");
}

#[test]
fn test_host_header_keeps_port() {
    let url = Url::parse("http://127.0.0.1:8080/users").unwrap();
    assert_eq!(host_header(&url).unwrap(), "127.0.0.1:8080");
}

#[test]
fn test_host_header_rejects_missing_authority() {
    let url = Url::parse("mailto:someone@example.com").unwrap();
    let err = host_header(&url).unwrap_err();
    assert!(matches!(err, Error::MissingAuthority { .. }));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn test_config_default_headers() {
    let config = HttpClientConfig::default();
    assert_eq!(
        config.default_headers.get("accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        config
            .default_headers
            .get("content-type")
            .map(String::as_str),
        Some("application/json")
    );
    assert!(config.user_agent.starts_with("okta-export/"));
}

#[test]
fn test_config_builder() {
    let config = HttpClientConfig::builder()
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_http_client_debug_hides_token() {
    let client = HttpClient::with_token(
        HttpClientConfig::default(),
        Some(SswsToken::new("super-secret")),
    );
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("has_token: true"));
    assert!(!debug_str.contains("super-secret"));
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_get_page_sends_required_headers() {
    let mock_server = MockServer::start().await;
    let authority = mock_server.uri().trim_start_matches("http://").to_string();

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .and(query_param("limit", "200"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(header("Host", authority.as_str()))
        .and(header("Authorization", "SSWS test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_token(
        HttpClientConfig::default(),
        Some(SswsToken::new("test-token")),
    );
    let page = client
        .get_page(&format!("{}/api/v1/users?limit=200", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(&page.body[..], b"[]");
}

#[tokio::test]
async fn test_get_page_without_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let page = client
        .get_page(&format!("{}/api/v1/users", mock_server.uri()))
        .await
        .unwrap();

    assert_eq!(&page.body[..], b"[]");
}

#[tokio::test]
async fn test_get_page_keeps_headers_for_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .insert_header("Link", "<https://x/2>; rel=\"next\""),
        )
        .mount(&mock_server)
        .await;

    let client = HttpClient::new();
    let page = client
        .get_page(&format!("{}/api/v1/users", mock_server.uri()))
        .await
        .unwrap();

    let link = page.headers.get("link").unwrap().to_str().unwrap();
    assert_eq!(link, "<https://x/2>; rel=\"next\"");
}

#[tokio::test]
async fn test_get_page_non_2xx_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/api/v1/users", mock_server.uri());
    let client = HttpClient::new();
    let err = client.get_page(&url).await.unwrap_err();

    match err {
        Error::HttpStatus {
            status,
            url: err_url,
            body,
        } => {
            assert_eq!(status, 403);
            assert_eq!(err_url, url);
            assert_eq!(body, "forbidden");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_page_transport_failure() {
    // Nothing listens on port 1; the connection is refused outright.
    let client = HttpClient::new();
    let err = client
        .get_page("http://127.0.0.1:1/api/v1/users")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_get_page_rejects_malformed_url() {
    let client = HttpClient::new();
    let err = client.get_page("not a url at all").await.unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}
