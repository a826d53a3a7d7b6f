//! Error types for the neobrutalism MCP server

use neobrutal_core::CatalogError;
use thiserror::Error;

/// Result type for MCP operations
pub type McpResult<T> = Result<T, McpError>;

/// Errors that can occur in the MCP server
#[derive(Error, Debug)]
pub enum McpError {
    /// Unknown JSON-RPC method
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Unknown tool name in tools/call
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Request envelope is not valid JSON-RPC
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool arguments do not match the declared schema
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// A tool ran and failed
    #[error("Tool request failed: {0}")]
    ToolFailed(String),

    /// Catalog lookup error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl McpError {
    /// Get error code for MCP protocol
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::Serialization(_) => -32700,
            McpError::InvalidRequest(_) => -32600,
            McpError::MethodNotFound(_) | McpError::ToolNotFound(_) => -32601,
            McpError::InvalidParams(_) => -32602,
            McpError::ToolFailed(_)
            | McpError::Catalog(_)
            | McpError::Io(_)
            | McpError::Internal(_) => -32603,
        }
    }

    /// Wrap any tool-side failure the way it is reported to clients
    pub fn tool_failed(err: impl std::fmt::Display) -> Self {
        McpError::ToolFailed(err.to_string())
    }
}
