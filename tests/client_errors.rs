//! Error mapping tests.
//!
//! Uses wiremock to return failing responses and checks how each operation
//! surfaces them.

use babelnet::{BabelNetClient, BabelNetError, WordQuery};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(mock_server: &MockServer) -> BabelNetClient {
    BabelNetClient::builder("test-key")
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

fn assert_api_error(result: babelnet::Result<impl std::fmt::Debug>, message: &str, code: u16) {
    match result {
        Err(BabelNetError::ApiError {
            message: m,
            status_code,
        }) => {
            assert_eq!(m, message);
            assert_eq!(status_code, code);
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_fails_every_operation() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "not found"})),
        )
        .expect(5)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let query = WordQuery::new("dog");

    assert_api_error(client.get_version().await, "not found", 404);
    assert_api_error(client.get_synset_ids(&query).await, "not found", 404);
    assert_api_error(client.get_synset_by_id("bn:00015267n", None).await, "not found", 404);
    assert_api_error(client.get_senses(&query).await, "not found", 404);
    assert_api_error(client.get_edges("bn:00015267n").await, "not found", 404);
}

#[tokio::test]
async fn test_error_display_includes_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "Your key is not valid or the daily requests limit has been reached."
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).get_version().await.unwrap_err();
    assert_eq!(err.status_code(), Some(403));
    let text = err.to_string();
    assert!(text.contains("403"));
    assert!(text.contains("daily requests limit"));
}

#[tokio::test]
async fn test_non_json_error_body_has_empty_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    assert_api_error(client(&mock_server).get_version().await, "", 502);
}

#[tokio::test]
async fn test_error_without_message_field_has_empty_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "boom"})))
        .mount(&mock_server)
        .await;

    assert_api_error(client(&mock_server).get_edges("bn:1n").await, "", 500);
}

#[tokio::test]
async fn test_only_200_counts_as_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getVersion"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"version": "V4_0"})),
        )
        .mount(&mock_server)
        .await;

    assert_api_error(client(&mock_server).get_version().await, "", 201);
}

#[tokio::test]
async fn test_success_with_invalid_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).get_version().await.unwrap_err();
    assert!(matches!(err, BabelNetError::ParseError(_)));
}

#[tokio::test]
async fn test_wrong_shape_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "bn:1n"})))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);

    let err = client.get_synset_ids(&WordQuery::new("dog")).await.unwrap_err();
    assert!(matches!(err, BabelNetError::UnexpectedResponse { .. }));

    let err = client.get_edges("bn:1n").await.unwrap_err();
    assert!(matches!(err, BabelNetError::ParseError(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BabelNetClient::builder("test-key")
        .base_url(format!("http://{addr}"))
        .build()
        .unwrap();

    let err = client.get_version().await.unwrap_err();
    assert!(matches!(err, BabelNetError::TransportError(_)));
    assert_eq!(err.status_code(), None);
}
