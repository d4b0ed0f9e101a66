//! Tests for the MCP server implementation.

use babelnet::mcp::{BabelNetServer, EdgesParams, SynsetParams};
use babelnet::BabelNetClient;
use rmcp::handler::server::ServerHandler;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock_server: &MockServer) -> BabelNetServer {
    let client = BabelNetClient::builder("test-key")
        .base_url(mock_server.uri())
        .build()
        .unwrap();
    BabelNetServer::new(client)
}

/// Extract text from CallToolResult content.
fn extract_text(result: &rmcp::model::CallToolResult) -> &str {
    let content = &result.content[0];
    content.raw.as_text().expect("Expected text content").text.as_str()
}

#[test]
fn babelnet_server_implements_server_handler() {
    fn assert_server_handler<T: ServerHandler>() {}
    assert_server_handler::<BabelNetServer>();
}

#[test]
fn babelnet_server_is_clone_send_sync() {
    fn assert_bounds<T: Clone + Send + Sync>() {}
    assert_bounds::<BabelNetServer>();
}

#[test]
fn get_info_names_the_server() {
    let client = BabelNetClient::new("test-key").unwrap();
    let info = BabelNetServer::new(client).get_info();

    assert_eq!(info.server_info.name, "babelnet");
    assert!(info.capabilities.tools.is_some());
}

#[tokio::test]
async fn test_mcp_get_version_returns_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getVersion"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"version": "V4_0"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server_for(&mock_server)
        .handle_get_version()
        .await
        .expect("handle_get_version should succeed");

    let json: serde_json::Value = serde_json::from_str(extract_text(&result)).unwrap();
    assert_eq!(json["version"], "V4_0");
}

#[tokio::test]
async fn test_mcp_get_synset_passes_filter_langs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getSynset"))
        .and(query_param("id", "bn:00015267n"))
        .and(query_param("filterLangs", "IT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "senses": [{"lemma": "cane", "language": "IT",
                        "synsetID": {"id": "bn:00015267n"}}],
            "glosses": [{"language": "IT", "gloss": "Il cane domestico"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server_for(&mock_server)
        .handle_get_synset(SynsetParams {
            id: "bn:00015267n".to_string(),
            filter_langs: Some("IT".to_string()),
        })
        .await
        .expect("handle_get_synset should succeed");

    assert!(!result.is_error.unwrap_or(false));
    let text = extract_text(&result);
    assert!(text.contains("Il cane domestico"));
    assert!(text.contains("cane"));
}

#[tokio::test]
async fn test_mcp_get_edges_api_failure_is_internal_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/getEdges"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "backend down"})),
        )
        .mount(&mock_server)
        .await;

    let err = server_for(&mock_server)
        .handle_get_edges(EdgesParams {
            id: "bn:00015267n".to_string(),
        })
        .await
        .unwrap_err();

    assert!(err.message.contains("backend down"));
}
