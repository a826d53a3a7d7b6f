//! Tool dispatch
//!
//! Maps a `tools/call` request onto the component source, after checking
//! the arguments against the tool's declared input schema. Any failure of
//! the tool itself is reported as `Tool request failed: <cause>`.

use std::collections::HashMap;
use std::sync::Arc;

use jsonschema::JSONSchema;
use neobrutal_core::ComponentSource;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{McpError, McpResult};
use crate::tools::components::ComponentNameInput;
use crate::tools::repository::DirectoryStructureInput;
use crate::tools::{get_tool_definitions, ToolCall, ToolDefinition, ToolResult};

/// Routes tool calls to a [`ComponentSource`]
pub struct ToolDispatcher {
    source: Arc<dyn ComponentSource>,
    tools: Vec<ToolDefinition>,
    validators: HashMap<String, JSONSchema>,
}

impl ToolDispatcher {
    /// Create a dispatcher, compiling every tool's input schema up front
    pub fn new(source: Arc<dyn ComponentSource>) -> McpResult<Self> {
        let tools = get_tool_definitions();
        let mut validators = HashMap::with_capacity(tools.len());

        for tool in &tools {
            let compiled = JSONSchema::compile(&tool.input_schema).map_err(|e| {
                McpError::Internal(format!("invalid input schema for {}: {}", tool.name, e))
            })?;
            validators.insert(tool.name.clone(), compiled);
        }

        Ok(Self {
            source,
            tools,
            validators,
        })
    }

    /// Declared tools, in listing order
    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }

    pub fn source(&self) -> &Arc<dyn ComponentSource> {
        &self.source
    }

    /// Check tool arguments against the tool's input schema
    pub fn validate(&self, name: &str, arguments: &Value) -> McpResult<()> {
        let schema = self
            .validators
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        if let Err(errors) = schema.validate(arguments) {
            let details = errors
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(McpError::InvalidParams(format!("{}: {}", name, details)));
        }
        Ok(())
    }

    /// Run a tool call
    pub async fn dispatch(&self, call: ToolCall) -> McpResult<ToolResult> {
        let arguments = if call.arguments.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            call.arguments
        };

        self.validate(&call.name, &arguments)?;
        info!("Processing tool request: {}", call.name);

        self.run(&call.name, arguments).await.map_err(|e| {
            error!("Tool request failed: {}: {}", call.name, e);
            match e {
                McpError::Catalog(cause) => McpError::tool_failed(cause),
                McpError::InvalidParams(_) | McpError::ToolFailed(_) => e,
                other => McpError::tool_failed(other),
            }
        })
    }

    async fn run(&self, name: &str, arguments: Value) -> McpResult<ToolResult> {
        match name {
            "get_component" => {
                let input: ComponentNameInput = parse_input(name, arguments)?;
                let source = self.source.component_source(&input.component_name).await?;
                Ok(ToolResult::text(source))
            }
            "get_component_demo" => {
                let input: ComponentNameInput = parse_input(name, arguments)?;
                let demo = self.source.component_demo(&input.component_name).await?;
                Ok(ToolResult::text(demo))
            }
            "list_components" => {
                let names = self.source.list_components().await;
                Ok(ToolResult::text(serde_json::to_string_pretty(&names)?))
            }
            "get_component_metadata" => {
                let input: ComponentNameInput = parse_input(name, arguments)?;
                let entry = self.source.component_metadata(&input.component_name).await;
                Ok(ToolResult::text(serde_json::to_string_pretty(&entry)?))
            }
            "get_directory_structure" => {
                let input: DirectoryStructureInput = parse_input(name, arguments)?;
                debug!("Directory structure requested with {:?}", input);
                let tree = self.source.directory_structure().await?;
                Ok(ToolResult::text(serde_json::to_string_pretty(&tree)?))
            }
            other => Err(McpError::ToolNotFound(other.to_string())),
        }
    }
}

fn parse_input<T: DeserializeOwned>(tool: &str, arguments: Value) -> McpResult<T> {
    serde_json::from_value(arguments)
        .map_err(|e| McpError::InvalidParams(format!("{}: {}", tool, e)))
}
