//! MCP Server handler for the BabelNet API.

use rmcp::{
    handler::server::ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, Content, ErrorData as McpError, Implementation,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
        ToolsCapability,
    },
    service::RequestContext,
    RoleServer,
};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::{
    mcp::{EdgesParams, SynsetParams, WordParams},
    BabelNetClient, BabelNetError, WordQuery,
};

/// BabelNet MCP Server.
///
/// Implements the MCP ServerHandler trait, providing one tool per
/// BabelNet operation.
///
/// # Tools
///
/// - `get_version` - BabelNet version string
/// - `get_synset_ids` - Synset ids denoted by a word
/// - `get_synset` - Details of a synset
/// - `get_senses` - Senses of a word
/// - `get_edges` - Outgoing edges of a synset
#[derive(Clone)]
pub struct BabelNetServer {
    client: Arc<BabelNetClient>,
}

impl BabelNetServer {
    /// Create a new BabelNetServer from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BABELNET_API_KEY` is not set.
    pub fn from_env() -> crate::Result<Self> {
        let client = BabelNetClient::from_env()?;
        Ok(Self::new(client))
    }

    /// Create a new BabelNetServer with an existing client.
    pub fn new(client: BabelNetClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Generate JSON Schema for a type.
    fn schema<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
        let schema = schemars::schema_for!(T);
        let value = serde_json::to_value(&schema).unwrap_or(serde_json::json!({}));
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::new()),
        }
    }

    /// Convert BabelNetError to McpError.
    fn to_mcp_error(err: BabelNetError) -> McpError {
        match &err {
            BabelNetError::ApiError {
                message,
                status_code: 404,
            } => McpError::resource_not_found(message.clone(), None),
            BabelNetError::MissingParameter(name) => {
                McpError::invalid_params(format!("Missing required parameter '{name}'"), None)
            }
            BabelNetError::ConfigMissing(msg) => McpError::invalid_params(msg.clone(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }

    /// Serialize a tool result as pretty-printed JSON text.
    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    fn parse_args<T: DeserializeOwned>(args: serde_json::Value) -> Result<T, McpError> {
        serde_json::from_value(args).map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Handle the `get_version` tool.
    pub async fn handle_get_version(&self) -> Result<CallToolResult, McpError> {
        let version = self
            .client
            .get_version()
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&serde_json::json!({ "version": version }))
    }

    /// Handle the `get_synset_ids` tool.
    pub async fn handle_get_synset_ids(
        &self,
        params: WordParams,
    ) -> Result<CallToolResult, McpError> {
        let ids = self
            .client
            .get_synset_ids(&WordQuery::from(params))
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&ids)
    }

    /// Handle the `get_synset` tool.
    ///
    /// # Errors
    ///
    /// Returns a resource-not-found error when BabelNet answers 404, and an
    /// internal error for any other failure.
    pub async fn handle_get_synset(
        &self,
        params: SynsetParams,
    ) -> Result<CallToolResult, McpError> {
        let synset = self
            .client
            .get_synset_by_id(&params.id, params.filter_langs.as_deref())
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&synset)
    }

    /// Handle the `get_senses` tool.
    pub async fn handle_get_senses(&self, params: WordParams) -> Result<CallToolResult, McpError> {
        let senses = self
            .client
            .get_senses(&WordQuery::from(params))
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&senses)
    }

    /// Handle the `get_edges` tool.
    pub async fn handle_get_edges(&self, params: EdgesParams) -> Result<CallToolResult, McpError> {
        let edges = self
            .client
            .get_edges(&params.id)
            .await
            .map_err(Self::to_mcp_error)?;
        Self::json_result(&edges)
    }

    fn tools() -> Vec<Tool> {
        #[derive(JsonSchema)]
        struct NoParams {}

        vec![
            Tool::new(
                "get_version",
                "Return the version of the BabelNet knowledge base.",
                Self::schema::<NoParams>(),
            ),
            Tool::new(
                "get_synset_ids",
                "List the ids of the BabelNet synsets (concepts) denoted by a word. \
                 Optional: lang, filterLangs, pos, source, normalizer.",
                Self::schema::<WordParams>(),
            ),
            Tool::new(
                "get_synset",
                "Fetch a BabelNet synset by id (e.g. bn:00015267n): senses, glosses, \
                 examples, images, categories and domains.",
                Self::schema::<SynsetParams>(),
            ),
            Tool::new(
                "get_senses",
                "List the senses of a word across BabelNet sources. \
                 Optional: lang, filterLangs, pos, source, normalizer.",
                Self::schema::<WordParams>(),
            ),
            Tool::new(
                "get_edges",
                "List the semantic relations (hypernyms, hyponyms, related concepts) \
                 going out of a synset.",
                Self::schema::<EdgesParams>(),
            ),
        ]
    }
}

impl ServerHandler for BabelNetServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "babelnet".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "BabelNet MCP Server - Look up word senses, synsets, and semantic edges."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: PaginatedRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: Self::tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = request
            .arguments
            .map(serde_json::Value::Object)
            .unwrap_or(serde_json::json!({}));

        match request.name.as_ref() {
            "get_version" => self.handle_get_version().await,
            "get_synset_ids" => self.handle_get_synset_ids(Self::parse_args(args)?).await,
            "get_synset" => self.handle_get_synset(Self::parse_args(args)?).await,
            "get_senses" => self.handle_get_senses(Self::parse_args(args)?).await,
            "get_edges" => self.handle_get_edges(Self::parse_args(args)?).await,
            other => Err(McpError::invalid_params(
                format!("Unknown tool: {other}"),
                None,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn server_for(mock_server: &MockServer) -> BabelNetServer {
        let client = BabelNetClient::builder("test-key")
            .base_url(mock_server.uri())
            .build()
            .unwrap();
        BabelNetServer::new(client)
    }

    fn extract_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => &t.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn tools_cover_every_operation() {
        let names: Vec<String> = BabelNetServer::tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert_eq!(
            names,
            ["get_version", "get_synset_ids", "get_synset", "get_senses", "get_edges"]
        );
    }

    #[test]
    fn schema_generates_for_word_params() {
        let schema = BabelNetServer::schema::<WordParams>();
        assert!(!schema.is_empty());
    }

    #[test]
    fn not_found_maps_to_resource_not_found() {
        let err = BabelNetServer::to_mcp_error(BabelNetError::ApiError {
            message: "Synset not found".to_string(),
            status_code: 404,
        });
        assert_eq!(err.message, "Synset not found");

        let err = BabelNetServer::to_mcp_error(BabelNetError::MissingParameter("word"));
        assert!(err.message.contains("word"));
    }

    #[tokio::test]
    async fn handle_get_synset_ids_returns_ids() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/getSynsetIds"))
            .and(query_param("word", "dog"))
            .and(query_param("lang", "EN"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "bn:00015267n", "pos": "NOUN", "source": "BABELNET"}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let server = server_for(&mock_server);
        let params = WordParams {
            word: "dog".to_string(),
            lang: Some("EN".to_string()),
            filter_langs: None,
            pos: None,
            source: None,
            normalizer: None,
        };

        let result = server.handle_get_synset_ids(params).await.unwrap();
        assert!(!result.is_error.unwrap_or(false));

        let ids: Vec<String> = serde_json::from_str(extract_text(&result)).unwrap();
        assert_eq!(ids, vec!["bn:00015267n"]);
    }

    #[tokio::test]
    async fn handle_get_synset_not_found_is_resource_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/getSynset"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "Synset not found"})),
            )
            .mount(&mock_server)
            .await;

        let server = server_for(&mock_server);
        let err = server
            .handle_get_synset(SynsetParams {
                id: "bn:99999999n".to_string(),
                filter_langs: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.message, "Synset not found");
    }

    #[tokio::test]
    async fn handle_get_senses_with_empty_word_is_invalid_params() {
        let mock_server = MockServer::start().await;
        let server = server_for(&mock_server);

        let params: WordParams = serde_json::from_str(r#"{"word": ""}"#).unwrap();
        let err = server.handle_get_senses(params).await.unwrap_err();

        assert!(err.message.contains("word"));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }
}
