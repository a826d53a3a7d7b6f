//! Catalog capability and its local-file implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::describe::{DirectoryDescriber, DirectoryDescription};
use crate::error::Result;
use crate::lister::CatalogLister;
use crate::paths::CatalogRoot;
use crate::registry::{ComponentEntry, RegistryStore};
use crate::resolver::ComponentResolver;

/// Read-only access to a component catalog
#[async_trait]
pub trait ComponentSource: Send + Sync {
    /// Implementation source of a component
    async fn component_source(&self, name: &str) -> Result<String>;

    /// Usage demo of a component
    async fn component_demo(&self, name: &str) -> Result<String>;

    /// All known component names, sorted and distinct
    async fn list_components(&self) -> Vec<String>;

    /// Registry metadata for a component, if any
    async fn component_metadata(&self, name: &str) -> Option<ComponentEntry>;

    /// Description of the catalog layout
    async fn directory_structure(&self) -> Result<DirectoryDescription>;
}

/// Catalog backed by files under one [`CatalogRoot`]
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    root: CatalogRoot,
    registry: Arc<RegistryStore>,
    resolver: ComponentResolver,
    lister: CatalogLister,
    describer: DirectoryDescriber,
}

impl LocalCatalog {
    /// Create a catalog; nothing is read until the first lookup
    pub fn new(root: CatalogRoot) -> Self {
        let registry = Arc::new(RegistryStore::new(root.registry_file()));
        Self {
            resolver: ComponentResolver::new(root.clone(), Arc::clone(&registry)),
            lister: CatalogLister::new(root.clone(), Arc::clone(&registry)),
            describer: DirectoryDescriber::new(),
            registry,
            root,
        }
    }

    pub fn root(&self) -> &CatalogRoot {
        &self.root
    }

    /// Shared registry handle
    pub fn registry(&self) -> &Arc<RegistryStore> {
        &self.registry
    }
}

#[async_trait]
impl ComponentSource for LocalCatalog {
    async fn component_source(&self, name: &str) -> Result<String> {
        self.resolver.get_source(name).await
    }

    async fn component_demo(&self, name: &str) -> Result<String> {
        self.resolver.get_demo(name).await
    }

    async fn list_components(&self) -> Vec<String> {
        self.lister.list_components().await
    }

    async fn component_metadata(&self, name: &str) -> Option<ComponentEntry> {
        self.resolver.get_metadata(name).await
    }

    async fn directory_structure(&self) -> Result<DirectoryDescription> {
        Ok(self.describer.describe_tree())
    }
}
