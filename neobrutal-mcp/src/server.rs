//! MCP Server protocol implementation
//!
//! This module handles the MCP JSON-RPC protocol over newline-delimited
//! stdio. Each request runs in its own task; responses are written by a
//! single writer in completion order, so overlapping requests may be
//! answered out of order.

use std::sync::Arc;

use neobrutal_core::{catalog_for, CatalogRoot, ComponentSource, PathResolver};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::{McpError, McpResult};
use crate::handler::ToolDispatcher;
use crate::tools::ToolCall;

/// MCP protocol revision spoken by this server
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP JSON-RPC request
#[derive(Debug, Deserialize)]
pub struct MCPRequest {
    pub jsonrpc: String,
    /// `None` only when the member is absent; an explicit `null` is an id
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

fn present_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

/// MCP JSON-RPC response
#[derive(Debug, Serialize)]
pub struct MCPResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MCPError>,
}

#[derive(Debug, Serialize)]
pub struct MCPError {
    pub code: i32,
    pub message: String,
}

impl MCPResponse {
    fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    fn failure(id: Value, err: &McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(MCPError {
                code: err.error_code(),
                message: err.to_string(),
            }),
        }
    }
}

/// The neobrutalism components MCP server
pub struct McpServer {
    config: ServerConfig,
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a server over an existing component source
    pub fn new(config: ServerConfig, source: Arc<dyn ComponentSource>) -> McpResult<Self> {
        Ok(Self {
            config,
            dispatcher: ToolDispatcher::new(source)?,
        })
    }

    /// Create a server, resolving the catalog root from the configuration
    pub fn from_config(config: ServerConfig) -> McpResult<Self> {
        let root = match &config.components_dir {
            Some(dir) => {
                info!("Using configured components directory: {}", dir.display());
                CatalogRoot::new(dir.clone())
            }
            None => PathResolver::from_process().resolve(),
        };

        let source = catalog_for(config.framework, root);
        Self::new(config, source)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }

    /// Handle one raw protocol line
    ///
    /// Returns `None` for notifications, which get no response. Text that
    /// is not JSON is a parse error; JSON that is not a request object is
    /// an invalid request.
    pub async fn handle_line(&self, line: &str) -> Option<MCPResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!("Unparseable request: {}", e);
                return Some(MCPResponse::failure(
                    Value::Null,
                    &McpError::Serialization(e),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: MCPRequest = match serde_json::from_value(value) {
            Ok(req) => req,
            Err(e) => {
                warn!("Malformed request: {}", e);
                return Some(MCPResponse::failure(
                    id,
                    &McpError::InvalidRequest(e.to_string()),
                ));
            }
        };

        self.handle_request(request).await
    }

    /// Handle an MCP request
    pub async fn handle_request(&self, request: MCPRequest) -> Option<MCPResponse> {
        let Some(id) = request.id else {
            debug!("Notification: {}", request.method);
            return None;
        };

        if request.jsonrpc != "2.0" {
            return Some(MCPResponse::failure(
                id,
                &McpError::InvalidRequest("Invalid JSON-RPC version".to_string()),
            ));
        }

        let result = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "ping" => Ok(serde_json::json!({})),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(request.params).await,
            other => Err(McpError::MethodNotFound(other.to_string())),
        };

        Some(match result {
            Ok(value) => MCPResponse::success(id, value),
            Err(e) => MCPResponse::failure(id, &e),
        })
    }

    fn handle_initialize(&self) -> Value {
        serde_json::json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": self.config.name,
                "version": self.config.version
            },
            "capabilities": {
                "tools": {}
            }
        })
    }

    fn handle_tools_list(&self) -> Value {
        serde_json::json!({ "tools": self.dispatcher.tools() })
    }

    async fn handle_tools_call(&self, params: Value) -> McpResult<Value> {
        let call: ToolCall = serde_json::from_value(params)
            .map_err(|e| McpError::InvalidParams(format!("tools/call: {}", e)))?;

        let result = self.dispatcher.dispatch(call).await?;
        Ok(serde_json::to_value(result)?)
    }

    /// Serve requests from `reader`, writing responses to `writer`
    ///
    /// Returns once the reader is exhausted and every in-flight request
    /// has been answered.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, writer: W) -> McpResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel::<MCPResponse>();
        let writer_task = tokio::spawn(write_responses(rx, writer));

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim().to_string();
            if line.is_empty() {
                continue;
            }

            let server = Arc::clone(&self);
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    // Receiver only goes away if the writer failed
                    let _ = tx.send(response);
                }
            });
        }

        drop(tx);
        writer_task
            .await
            .map_err(|e| McpError::Internal(format!("response writer panicked: {}", e)))?
    }

    /// Run the MCP server over stdio
    pub async fn run_stdio(self: Arc<Self>) -> McpResult<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }
}

async fn write_responses<W>(
    mut rx: mpsc::UnboundedReceiver<MCPResponse>,
    mut writer: W,
) -> McpResult<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut frame = serde_json::to_vec(&response)?;
        frame.push(b'\n');
        writer.write_all(&frame).await?;
        writer.flush().await?;
    }
    Ok(())
}
