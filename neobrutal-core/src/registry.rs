//! Component registry
//!
//! The registry is the `registry.json` document at the catalog root. It is
//! read at most once per process: the first successful parse is kept in a
//! [`OnceCell`] owned by the [`RegistryStore`] and shared by handle with
//! every consumer. A missing or broken registry is a normal state that the
//! lookups answer with their fallbacks.
//!
//! Items are kept as the JSON objects they were written as. Typed views
//! over their fields are read on demand, so one odd item never hides the
//! others and metadata is returned unaltered.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};

/// Parsed registry document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    /// Items that carry a string `name`, in document order
    pub items: Vec<ComponentEntry>,

    /// Any other top-level fields (schema, homepage, ...)
    pub extra: Map<String, Value>,
}

impl Registry {
    /// Parse a registry document
    ///
    /// Only the top level has to be well formed. Items without a string
    /// `name` are skipped; everything else about an item is kept as is.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut document: Map<String, Value> = serde_json::from_str(json)?;

        let raw_items = match document.remove("items") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                warn!("Registry \"items\" is not an array, ignoring it: {}", other);
                Vec::new()
            }
            None => Vec::new(),
        };

        let total = raw_items.len();
        let items: Vec<ComponentEntry> = raw_items
            .into_iter()
            .filter_map(ComponentEntry::from_value)
            .collect();
        if items.len() < total {
            warn!("Skipped {} registry items without a name", total - items.len());
        }

        Ok(Self {
            items,
            extra: document,
        })
    }

    /// Whether the registry lists at least one component
    pub fn has_entries(&self) -> bool {
        !self.items.is_empty()
    }

    /// Exact, case-sensitive lookup by `name`
    pub fn find(&self, name: &str) -> Option<&ComponentEntry> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Entry names, sorted and without duplicates
    pub fn names(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// Metadata for one component, exactly as written in the registry
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentEntry {
    name: String,
    fields: Map<String, Value>,
}

impl Serialize for ComponentEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl ComponentEntry {
    /// Wrap a raw registry item
    ///
    /// Returns `None` unless the item is an object with a string `name`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(fields) = value else {
            return None;
        };
        let name = fields.get("name")?.as_str()?.to_string();
        Some(Self { name, fields })
    }

    /// Unique identifier, matching the on-disk file stem
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// Category tag, e.g. `registry:ui`
    pub fn kind(&self) -> Option<&str> {
        self.str_field("type")
    }

    pub fn dependencies(&self) -> Vec<&str> {
        self.str_list("dependencies")
    }

    pub fn registry_dependencies(&self) -> Vec<&str> {
        self.str_list("registryDependencies")
    }

    /// Well-formed `files` records; malformed ones are left out
    pub fn files(&self) -> Vec<ComponentFile> {
        self.records("files")
    }

    /// Well-formed `props` records; malformed ones are left out
    pub fn props(&self) -> Vec<ComponentProp> {
        self.records("props")
    }

    /// Well-formed `examples` records; malformed ones are left out
    pub fn examples(&self) -> Vec<ComponentExample> {
        self.records("examples")
    }

    /// Raw value of any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    fn str_list(&self, key: &str) -> Vec<&str> {
        match self.fields.get(key) {
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    fn records<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.fields.get(key) {
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(|value| serde_json::from_value(value.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// File belonging to a component
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentFile {
    pub path: String,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub target: Option<String>,
}

/// Usage example attached to a component
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentExample {
    #[serde(default)]
    pub title: Option<String>,

    pub code: String,

    #[serde(default)]
    pub url: Option<String>,
}

/// Documented component prop
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ComponentProp {
    pub name: String,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: Option<bool>,

    /// Default value, any JSON type
    #[serde(default)]
    pub default: Option<Value>,
}

/// Lazily loaded, process-wide registry cache
#[derive(Debug)]
pub struct RegistryStore {
    /// Location of `registry.json`
    path: PathBuf,

    /// Set once by the first successful parse, never refreshed
    cell: OnceCell<Arc<Registry>>,
}

impl RegistryStore {
    /// Create a store for the registry at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a registry has already been parsed and cached
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    /// Load the registry, reading the file only if nothing is cached yet
    ///
    /// Failures are not cached, so a later call retries the read.
    pub async fn try_load(&self) -> Result<Arc<Registry>> {
        self.cell
            .get_or_try_init(|| async {
                debug!("Reading registry from {}", self.path.display());
                let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                    CatalogError::RegistryUnavailable {
                        path: self.path.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;

                let registry = Registry::from_json(&content).map_err(|e| {
                    CatalogError::RegistryUnavailable {
                        path: self.path.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;

                Ok::<_, CatalogError>(Arc::new(registry))
            })
            .await
            .cloned()
    }

    /// Load the registry, treating any failure as "no registry"
    pub async fn load(&self) -> Option<Arc<Registry>> {
        match self.try_load().await {
            Ok(registry) => Some(registry),
            Err(e) => {
                warn!("Could not load local registry: {}", e);
                None
            }
        }
    }
}
