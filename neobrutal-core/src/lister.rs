//! Component enumeration
//!
//! The registry is authoritative when it lists anything. Without it, both
//! tier directories are scanned and their file stems merged.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::paths::{CatalogRoot, Tier};
use crate::registry::RegistryStore;
use crate::resolver::SOURCE_EXTENSION;

/// Lists every known component name
#[derive(Debug, Clone)]
pub struct CatalogLister {
    root: CatalogRoot,
    registry: Arc<RegistryStore>,
}

impl CatalogLister {
    pub fn new(root: CatalogRoot, registry: Arc<RegistryStore>) -> Self {
        Self { root, registry }
    }

    /// Sorted, duplicate-free component names
    ///
    /// Never fails: unreadable tiers contribute nothing.
    pub async fn list_components(&self) -> Vec<String> {
        if let Some(registry) = self.registry.load().await {
            if registry.has_entries() {
                let names = registry.names();
                info!("Loaded {} components from local registry", names.len());
                return names;
            }
        }

        let mut names = BTreeSet::new();
        for tier in Tier::SEARCH_ORDER {
            match self.scan_tier(tier).await {
                Ok(found) => names.extend(found),
                Err(e) => warn!("Could not read {} components directory: {}", tier.dir_name(), e),
            }
        }

        names.into_iter().collect()
    }

    /// File stems of every component implementation in one tier
    pub async fn scan_tier(&self, tier: Tier) -> Result<Vec<String>> {
        let dir = self.root.tier_dir(tier);
        let mut entries = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| CatalogError::io(&dir, e))?;

        let suffix = format!(".{}", SOURCE_EXTENSION);
        let mut stems = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CatalogError::io(&dir, e))?
        {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(stem) = file_name.strip_suffix(&suffix) {
                if !stem.is_empty() {
                    stems.push(stem.to_string());
                }
            }
        }

        Ok(stems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_scan_tier_filters_extension() {
        let dir = tempfile::tempdir().unwrap();
        let ui = dir.path().join("ui");
        fs::create_dir_all(&ui).unwrap();
        for file in ["button.tsx", "card.tsx", "README.md", "utils.ts", ".tsx"] {
            fs::write(ui.join(file), "").unwrap();
        }

        let root = CatalogRoot::new(dir.path());
        let lister = CatalogLister::new(root.clone(), Arc::new(RegistryStore::new(root.registry_file())));

        let mut stems = lister.scan_tier(Tier::Ui).await.unwrap();
        stems.sort();
        assert_eq!(stems, vec!["button", "card"]);

        let err = lister.scan_tier(Tier::Stars).await.unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }

    #[tokio::test]
    async fn test_empty_registry_falls_back_to_scan() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("stars")).unwrap();
        fs::write(dir.path().join("stars/s1.tsx"), "").unwrap();
        fs::write(dir.path().join("registry.json"), r#"{ "items": [] }"#).unwrap();

        let root = CatalogRoot::new(dir.path());
        let lister = CatalogLister::new(root.clone(), Arc::new(RegistryStore::new(root.registry_file())));

        assert_eq!(lister.list_components().await, vec!["s1"]);
    }
}
