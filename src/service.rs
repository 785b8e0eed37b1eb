//! rmcp-based MCP service layer
//!
//! Exposes the declared tools over the MCP protocol and routes each
//! invocation through a uniform validate → execute → format flow. Tool
//! failures are returned as error-flagged tool results, not protocol
//! errors, so a failing call never crashes the server or disturbs other
//! in-flight calls.

use std::borrow::Cow;
use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
    ToolsCapability,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::format::{format_search_results, format_summary};
use crate::kagi_client::{
    KagiClient, SummarizeRequest, SummarizerEngine, SummaryType,
};
use crate::registry::{ToolError, ToolKind};
use crate::types::{SearchParams, SummarizeParams};

/// MCP service wrapping a [`KagiClient`].
///
/// Holds no mutable state; each invocation is independent.
#[derive(Clone)]
pub struct KagiMcpService {
    client: KagiClient,
}

impl KagiMcpService {
    pub fn new(client: KagiClient) -> Self {
        Self { client }
    }

    /// Serve over stdio (stdin/stdout). Blocks until the host closes the
    /// connection.
    pub async fn serve_stdio(self) -> anyhow::Result<()> {
        use rmcp::ServiceExt;

        let service = self
            .serve((tokio::io::stdin(), tokio::io::stdout()))
            .await?;
        service.waiting().await?;
        Ok(())
    }

    /// Run one tool invocation: look up the tool, validate the arguments,
    /// execute against the Kagi API, and format the result as text.
    pub async fn invoke(
        &self,
        tool_name: &str,
        arguments: &Map<String, Value>,
    ) -> Result<String, ToolError> {
        let kind = ToolKind::from_name(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;
        self.dispatch(kind, arguments).await
    }

    async fn dispatch(
        &self,
        kind: ToolKind,
        arguments: &Map<String, Value>,
    ) -> Result<String, ToolError> {
        kind.definition().validate(arguments)?;

        match kind {
            ToolKind::Search => {
                let params: SearchParams = parse_params(arguments)?;
                let results = self.client.search(&params.query, params.limit).await?;
                Ok(format_search_results(&results))
            }
            ToolKind::Summarize => {
                let params: SummarizeParams = parse_params(arguments)?;
                let request = SummarizeRequest {
                    target: params.target,
                    engine: params
                        .engine
                        .as_deref()
                        .map(SummarizerEngine::parse)
                        .transpose()
                        .map_err(ToolError::Validation)?,
                    summary_type: params
                        .summary_type
                        .as_deref()
                        .map(SummaryType::parse)
                        .transpose()
                        .map_err(ToolError::Validation)?,
                    target_language: params.target_language,
                };
                let summary = self.client.summarize(&request).await?;
                Ok(format_summary(&summary))
            }
        }
    }
}

/// Deserialize a validated argument map into a typed parameter struct.
fn parse_params<T: serde::de::DeserializeOwned>(
    arguments: &Map<String, Value>,
) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| ToolError::Validation(format!("invalid arguments: {}", e)))
}

impl ServerHandler for KagiMcpService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability { list_changed: None }),
                ..Default::default()
            },
            server_info: Implementation {
                name: "kagi-mcp".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some("Kagi MCP Server".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Kagi MCP server for web search and summarization. Use search to fetch \
                 web results for a query, and summarize to condense a URL or text block \
                 (any document type, including video and audio)."
                    .into(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        let tools: Vec<Tool> = ToolKind::ALL
            .iter()
            .map(|kind| {
                let def = kind.definition();
                Tool {
                    name: Cow::Borrowed(def.name),
                    title: None,
                    description: Some(Cow::Borrowed(def.description)),
                    input_schema: Arc::new(def.input_schema()),
                    output_schema: None,
                    annotations: None,
                    icons: None,
                    meta: None,
                }
            })
            .collect();

        debug!("Listing {} tools", tools.len());
        Ok(ListToolsResult {
            tools,
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let name = request.name.as_ref();
        let arguments = request.arguments.unwrap_or_default();

        debug!("Calling tool: {}", name);

        Ok(match self.invoke(name, &arguments).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(err) => {
                warn!("Tool '{}' failed: {}", name, err);
                CallToolResult::error(vec![Content::text(err.to_string())])
            }
        })
    }
}
