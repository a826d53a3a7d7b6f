//! Tool dispatch tests against an in-memory component source

use std::sync::Arc;

use async_trait::async_trait;
use neobrutal_core::{
    CatalogError, ComponentEntry, ComponentSource, DirectoryDescriber, DirectoryDescription,
};
use neobrutal_mcp::tools::ToolCall;
use neobrutal_mcp::{McpError, ToolDispatcher};
use serde_json::{json, Value};

/// Source whose filesystem is always broken
struct BrokenSource;

#[async_trait]
impl ComponentSource for BrokenSource {
    async fn component_source(&self, _name: &str) -> neobrutal_core::Result<String> {
        Err(CatalogError::Io {
            path: "components/ui/button.tsx".to_string(),
            message: "permission denied".to_string(),
        })
    }

    async fn component_demo(&self, name: &str) -> neobrutal_core::Result<String> {
        Err(CatalogError::DemoNotFound {
            name: name.to_string(),
        })
    }

    async fn list_components(&self) -> Vec<String> {
        Vec::new()
    }

    async fn component_metadata(&self, _name: &str) -> Option<ComponentEntry> {
        None
    }

    async fn directory_structure(&self) -> neobrutal_core::Result<DirectoryDescription> {
        Ok(DirectoryDescriber::new().describe_tree())
    }
}

fn dispatcher() -> ToolDispatcher {
    ToolDispatcher::new(Arc::new(BrokenSource)).unwrap()
}

fn call(name: &str, arguments: Value) -> ToolCall {
    ToolCall {
        name: name.to_string(),
        arguments,
    }
}

#[tokio::test]
async fn test_io_failure_becomes_tool_failure() {
    let err = dispatcher()
        .dispatch(call("get_component", json!({ "componentName": "button" })))
        .await
        .unwrap_err();

    assert!(matches!(err, McpError::ToolFailed(_)));
    assert_eq!(err.error_code(), -32603);
    assert_eq!(
        err.to_string(),
        "Tool request failed: IO error at 'components/ui/button.tsx': permission denied"
    );
}

#[tokio::test]
async fn test_demo_not_found_keeps_name() {
    let err = dispatcher()
        .dispatch(call("get_component_demo", json!({ "componentName": "Fancy-Card" })))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Tool request failed: Demo for component \"Fancy-Card\" not found in local examples"
    );
}

#[tokio::test]
async fn test_empty_catalog_lists_nothing() {
    let result = dispatcher()
        .dispatch(call("list_components", Value::Null))
        .await
        .unwrap();

    assert_eq!(result.content[0].text, "[]");
}

#[tokio::test]
async fn test_missing_metadata_is_null() {
    let result = dispatcher()
        .dispatch(call("get_component_metadata", json!({ "componentName": "button" })))
        .await
        .unwrap();

    assert_eq!(result.content[0].text, "null");
}

#[test]
fn test_validate() {
    let dispatcher = dispatcher();

    assert!(dispatcher.validate("list_components", &json!({})).is_ok());
    assert!(dispatcher
        .validate("get_component", &json!({ "componentName": "button" }))
        .is_ok());

    assert!(matches!(
        dispatcher.validate("get_component", &json!({})),
        Err(McpError::InvalidParams(_))
    ));
    assert!(matches!(
        dispatcher.validate("rename_component", &json!({})),
        Err(McpError::ToolNotFound(_))
    ));
}

#[test]
fn test_tools_in_listing_order() {
    let names: Vec<_> = dispatcher()
        .tools()
        .iter()
        .map(|tool| tool.name.clone())
        .collect();

    assert_eq!(
        names,
        vec![
            "get_component",
            "get_component_demo",
            "list_components",
            "get_component_metadata",
            "get_directory_structure",
        ]
    );
}
