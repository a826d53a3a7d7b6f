//! Repository layout tool

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ToolDefinition;

/// get_directory_structure tool definition
pub fn get_directory_structure_tool() -> ToolDefinition {
    ToolDefinition {
        name: "get_directory_structure".to_string(),
        description: "Get the directory structure of the neobrutalism-components repository"
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "path": {
                    "type": "string",
                    "description": "Path within the repository (default: src/components)"
                },
                "owner": {
                    "type": "string",
                    "description": "Repository owner (default: \"ekmas\")"
                },
                "repo": {
                    "type": "string",
                    "description": "Repository name (default: \"neobrutalism-components\")"
                },
                "branch": {
                    "type": "string",
                    "description": "Branch name (default: \"main\")"
                }
            }
        }),
    }
}

/// Input for get_directory_structure
///
/// Accepted for compatibility; the description returned is always the
/// static catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryStructureInput {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub branch: Option<String>,
}
