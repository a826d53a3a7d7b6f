//! Neobrutalism MCP Server Library
//!
//! This crate serves the local neobrutalism component catalog to agents
//! over the Model Context Protocol (MCP).
//!
//! ## Architecture
//!
//! ```text
//! Agent (Claude, GPT, etc.)
//!        │  JSON-RPC over stdio
//!        ▼
//! ┌─────────────────────┐
//! │     MCP Server      │ ◄── This crate
//! │                     │
//! │  ┌───────────────┐  │
//! │  │ ToolDispatcher│  │ - get_component
//! │  │               │  │ - get_component_demo
//! │  │               │  │ - list_components
//! │  │               │  │ - get_component_metadata
//! │  │               │  │ - get_directory_structure
//! │  └───────────────┘  │
//! └──────────┬──────────┘
//!            │
//!            ▼
//! ┌─────────────────────┐
//! │   neobrutal-core    │
//! │                     │
//! │ PathResolver │ Registry
//! │ Resolver     │ Lister
//! └─────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use neobrutal_mcp::{McpServer, ServerConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = ServerConfig::builder().build();
//!     let server = Arc::new(McpServer::from_config(config).unwrap());
//!
//!     server.run_stdio().await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod handler;
pub mod server;
pub mod tools;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use error::{McpError, McpResult};
pub use handler::ToolDispatcher;
pub use server::{MCPRequest, MCPResponse, McpServer};

/// Server metadata for MCP protocol
pub const SERVER_NAME: &str = "neobrutalism-mcp-server";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVER_DESCRIPTION: &str = "Local neobrutalism component source, demos and metadata";
