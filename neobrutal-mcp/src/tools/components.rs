//! Component lookup tools

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ToolDefinition;

const COMPONENT_NAME_DESCRIPTION: &str =
    "Name of the neobrutalism component (e.g., \"accordion\", \"button\", \"nbutton\", \"s1\")";

fn component_name_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["componentName"],
        "properties": {
            "componentName": {
                "type": "string",
                "description": COMPONENT_NAME_DESCRIPTION
            }
        }
    })
}

/// get_component tool definition
pub fn get_component_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_component".to_string(),
        description: "Get the source code for a specific neobrutalism component".to_string(),
        input_schema: component_name_schema(),
    }
}

/// get_component_demo tool definition
pub fn get_component_demo_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_component_demo".to_string(),
        description: "Get demo code illustrating how a neobrutalism component should be used"
            .to_string(),
        input_schema: component_name_schema(),
    }
}

/// list_components tool definition
pub fn list_components_tool() -> ToolDefinition {
    ToolDefinition {
        name: "list_components".to_string(),
        description: "Get all available neobrutalism components".to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {}
        }),
    }
}

/// get_component_metadata tool definition
pub fn get_component_metadata_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_component_metadata".to_string(),
        description: "Get metadata for a specific neobrutalism component".to_string(),
        input_schema: component_name_schema(),
    }
}

/// Input shared by the name-addressed tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentNameInput {
    #[serde(rename = "componentName")]
    pub component_name: String,
}
