//! Static description of the catalog layout
//!
//! This is a fixed snapshot of the four known top-level members. Nothing
//! here walks the filesystem.

use serde::ser::Serializer;
use serde::Serialize;

use crate::paths::{CATALOG_DIR_NAME, EXAMPLES_DIR_NAME, REGISTRY_FILE_NAME};

/// Kind of a described member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// One node of the directory description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryDescription {
    pub path: String,

    #[serde(rename = "type")]
    pub kind: NodeKind,

    pub description: String,

    /// Children keyed by name, serialized as an object in declaration order
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_children"
    )]
    pub children: Vec<(String, DirectoryDescription)>,
}

impl DirectoryDescription {
    fn leaf(path: String, kind: NodeKind, description: &str) -> Self {
        Self {
            path,
            kind,
            description: description.to_string(),
            children: Vec::new(),
        }
    }

    /// Child node by name
    pub fn child(&self, name: &str) -> Option<&DirectoryDescription> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }
}

#[allow(clippy::ptr_arg)]
fn serialize_children<S: Serializer>(
    children: &Vec<(String, DirectoryDescription)>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(children.iter().map(|(name, node)| (name, node)))
}

/// Describes the catalog's known top-level shape
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryDescriber;

impl DirectoryDescriber {
    pub fn new() -> Self {
        Self
    }

    /// The fixed catalog description
    pub fn describe_tree(&self) -> DirectoryDescription {
        let member = |name: &str| format!("{}/{}", CATALOG_DIR_NAME, name);

        let children = vec![
            (
                "ui".to_string(),
                DirectoryDescription::leaf(member("ui"), NodeKind::Directory, "UI components"),
            ),
            (
                "stars".to_string(),
                DirectoryDescription::leaf(
                    member("stars"),
                    NodeKind::Directory,
                    "Star decorative components",
                ),
            ),
            (
                EXAMPLES_DIR_NAME.to_string(),
                DirectoryDescription::leaf(
                    member(EXAMPLES_DIR_NAME),
                    NodeKind::Directory,
                    "Component examples and demos",
                ),
            ),
            (
                REGISTRY_FILE_NAME.to_string(),
                DirectoryDescription::leaf(
                    member(REGISTRY_FILE_NAME),
                    NodeKind::File,
                    "Component registry metadata",
                ),
            ),
        ];

        DirectoryDescription {
            path: CATALOG_DIR_NAME.to_string(),
            kind: NodeKind::Directory,
            description: "Local neobrutalism components".to_string(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_shape() {
        let tree = DirectoryDescriber::new().describe_tree();

        assert_eq!(tree.path, "components");
        assert_eq!(tree.kind, NodeKind::Directory);
        let names: Vec<&str> = tree.children.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["ui", "stars", "examples", "registry.json"]);

        let registry = tree.child("registry.json").unwrap();
        assert_eq!(registry.kind, NodeKind::File);
        assert_eq!(registry.path, "components/registry.json");
        assert!(tree.child("ui").unwrap().children.is_empty());
    }

    #[test]
    fn test_serialized_form() {
        let value = serde_json::to_value(DirectoryDescriber::new().describe_tree()).unwrap();

        assert_eq!(value["type"], "directory");
        assert_eq!(value["children"]["stars"]["path"], "components/stars");
        assert_eq!(value["children"]["registry.json"]["type"], "file");
        assert!(value["children"]["ui"].get("children").is_none());
    }

    #[test]
    fn test_pretty_output_keeps_declaration_order() {
        let text = serde_json::to_string_pretty(&DirectoryDescriber::new().describe_tree()).unwrap();

        let ui = text.find("\"ui\"").unwrap();
        let stars = text.find("\"stars\"").unwrap();
        let examples = text.find("\"examples\"").unwrap();
        let registry = text.find("\"registry.json\"").unwrap();
        assert!(ui < stars && stars < examples && examples < registry);
    }
}
