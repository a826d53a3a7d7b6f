//! Name-addressed lookups against the catalog root
//!
//! Source files live in one of two tiers (`ui/` before `stars/`), demos in
//! `examples/`. Every lookup walks a fixed list of candidate files and
//! returns the first one that exists; tiers are never merged.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::paths::{CatalogRoot, Tier};
use crate::registry::{ComponentEntry, RegistryStore};

/// Extension of component implementation and demo files
pub const SOURCE_EXTENSION: &str = "tsx";

/// Demo entry file inside a per-component demo directory
const DEMO_INDEX_FILE: &str = "index";

/// Lower-case `name` and check that it is usable as one path segment
///
/// Rejects empty names, `.` and `..`, and anything containing a path
/// separator or NUL, so a crafted name cannot escape the catalog root.
pub fn component_file_stem(name: &str) -> Result<String> {
    let invalid = |reason: &str| CatalogError::InvalidComponentName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name is empty"));
    }
    if name == "." || name == ".." {
        return Err(invalid("name refers to a directory"));
    }
    if name.contains(['/', '\\']) {
        return Err(invalid("name contains a path separator"));
    }
    if name.contains('\0') {
        return Err(invalid("name contains a NUL byte"));
    }

    Ok(name.to_lowercase())
}

/// Read the first candidate that is an existing regular file
///
/// `Ok(None)` means no candidate exists. A candidate that exists but
/// cannot be read is an error, not a reason to try the next one.
pub async fn read_first_existing(candidates: &[PathBuf]) -> Result<Option<(PathBuf, String)>> {
    for candidate in candidates {
        if !is_file(candidate).await {
            debug!("Not found: {}", candidate.display());
            continue;
        }

        let text = tokio::fs::read_to_string(candidate)
            .await
            .map_err(|e| CatalogError::io(candidate, e))?;
        return Ok(Some((candidate.clone(), text)));
    }

    Ok(None)
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Resolves component source, demo and metadata by name
#[derive(Debug, Clone)]
pub struct ComponentResolver {
    root: CatalogRoot,
    registry: Arc<RegistryStore>,
}

impl ComponentResolver {
    /// Create a resolver sharing the given registry store
    pub fn new(root: CatalogRoot, registry: Arc<RegistryStore>) -> Self {
        Self { root, registry }
    }

    pub fn root(&self) -> &CatalogRoot {
        &self.root
    }

    /// Source file candidates for a stem, in tier order
    pub fn source_candidates(&self, stem: &str) -> Vec<PathBuf> {
        Tier::SEARCH_ORDER
            .iter()
            .map(|tier| {
                self.root
                    .tier_dir(*tier)
                    .join(format!("{}.{}", stem, SOURCE_EXTENSION))
            })
            .collect()
    }

    /// Demo file candidates for a stem
    ///
    /// 1. `examples/ui/<name>.tsx`
    /// 2. `examples/ui/<name>/index.tsx`
    /// 3. `examples/stars/<name>.tsx`
    pub fn demo_candidates(&self, stem: &str) -> Vec<PathBuf> {
        let file_name = format!("{}.{}", stem, SOURCE_EXTENSION);
        let ui = self.root.examples_dir(Tier::Ui);
        vec![
            ui.join(&file_name),
            ui.join(stem)
                .join(format!("{}.{}", DEMO_INDEX_FILE, SOURCE_EXTENSION)),
            self.root.examples_dir(Tier::Stars).join(&file_name),
        ]
    }

    /// Source text of a component, looked up case-insensitively
    pub async fn get_source(&self, name: &str) -> Result<String> {
        let stem = component_file_stem(name)?;

        match read_first_existing(&self.source_candidates(&stem)).await? {
            Some((path, text)) => {
                debug!("Resolved component {} to {}", name, path.display());
                Ok(text)
            }
            None => Err(CatalogError::ComponentNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Demo text of a component
    pub async fn get_demo(&self, name: &str) -> Result<String> {
        let stem = component_file_stem(name)?;

        match read_first_existing(&self.demo_candidates(&stem)).await? {
            Some((path, text)) => {
                debug!("Resolved demo {} to {}", name, path.display());
                Ok(text)
            }
            None => Err(CatalogError::DemoNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// Registry entry whose `name` matches exactly
    ///
    /// `None` covers both "no registry" and "no such entry".
    pub async fn get_metadata(&self, name: &str) -> Option<ComponentEntry> {
        let registry = self.registry.load().await?;
        registry.find(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_is_lower_cased() {
        assert_eq!(component_file_stem("Button").unwrap(), "button");
        assert_eq!(component_file_stem("S12").unwrap(), "s12");
        assert_eq!(component_file_stem("date-picker").unwrap(), "date-picker");
    }

    #[test]
    fn test_stem_rejects_traversal() {
        for name in ["", "  ", ".", "..", "../registry", "ui/button", "..\\x", "a\0b"] {
            let err = component_file_stem(name).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_COMPONENT_NAME", "{:?}", name);
        }
    }

    #[test]
    fn test_demo_candidate_order() {
        let resolver = ComponentResolver::new(
            CatalogRoot::new("/c"),
            Arc::new(RegistryStore::new("/c/registry.json")),
        );

        assert_eq!(
            resolver.demo_candidates("button"),
            vec![
                PathBuf::from("/c/examples/ui/button.tsx"),
                PathBuf::from("/c/examples/ui/button/index.tsx"),
                PathBuf::from("/c/examples/stars/button.tsx"),
            ]
        );
        assert_eq!(
            resolver.source_candidates("s1"),
            vec![PathBuf::from("/c/ui/s1.tsx"), PathBuf::from("/c/stars/s1.tsx")]
        );
    }

    #[tokio::test]
    async fn test_read_first_existing_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let as_dir = dir.path().join("first.tsx");
        std::fs::create_dir_all(&as_dir).unwrap();
        let second = dir.path().join("second.tsx");
        std::fs::write(&second, "second").unwrap();

        let found = read_first_existing(&[as_dir, dir.path().join("missing.tsx"), second.clone()])
            .await
            .unwrap();
        assert_eq!(found, Some((second, "second".to_string())));
    }

    #[tokio::test]
    async fn test_read_first_existing_none() {
        let dir = tempfile::tempdir().unwrap();
        let found = read_first_existing(&[dir.path().join("nope.tsx")]).await.unwrap();
        assert!(found.is_none());
    }
}
