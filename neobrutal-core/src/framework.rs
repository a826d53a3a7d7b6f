//! Framework selection
//!
//! The server accepts a framework flag (`--framework` / `FRAMEWORK`), but
//! every framework is currently served by the same local catalog. The
//! selection is kept as a pure classification step so that a second
//! implementation only needs a new match arm in [`catalog_for`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{ComponentSource, LocalCatalog};
use crate::paths::CatalogRoot;

/// Component framework flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    #[default]
    React,
    Svelte,
    Vue,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::Svelte => "svelte",
            Framework::Vue => "vue",
        }
    }

    /// Descriptive information about the framework's catalog
    pub fn info(&self) -> FrameworkInfo {
        match self {
            Framework::React => FrameworkInfo {
                current: *self,
                repository: "local neobrutalism components".to_string(),
                file_extension: ".tsx".to_string(),
                description: "React components from neobrutalism-components".to_string(),
            },
            Framework::Svelte => FrameworkInfo {
                current: *self,
                repository: "local neobrutalism components (future)".to_string(),
                file_extension: ".svelte".to_string(),
                description: "Svelte components from neobrutalism (future)".to_string(),
            },
            Framework::Vue => FrameworkInfo {
                current: *self,
                repository: "local neobrutalism components (future)".to_string(),
                file_extension: ".vue".to_string(),
                description: "Vue components from neobrutalism (future)".to_string(),
            },
        }
    }

    /// The other frameworks, for the "how to switch" hint
    fn alternatives(&self) -> String {
        [Framework::React, Framework::Svelte, Framework::Vue]
            .iter()
            .filter(|f| *f != self)
            .map(Framework::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "react" => Ok(Framework::React),
            "svelte" => Ok(Framework::Svelte),
            "vue" => Ok(Framework::Vue),
            other => Err(format!("unknown framework '{}'", other)),
        }
    }
}

/// Framework details reported at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkInfo {
    pub current: Framework,
    pub repository: String,
    pub file_extension: String,
    pub description: String,
}

/// Where the selected framework came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionSource {
    CommandLine,
    Environment,
    Default,
}

/// Outcome of framework selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkSelection {
    pub framework: Framework,
    pub source: SelectionSource,
}

/// Pick a framework from the command-line value and the environment value
///
/// A valid command-line value wins, then a valid environment value, then
/// the default. An invalid command-line value is reported and ignored.
pub fn select_framework(cli: Option<&str>, env: Option<&str>) -> FrameworkSelection {
    if let Some(raw) = cli {
        match raw.parse::<Framework>() {
            Ok(framework) => {
                info!("Framework set to '{}' via command line argument", framework);
                return FrameworkSelection {
                    framework,
                    source: SelectionSource::CommandLine,
                };
            }
            Err(_) => warn!(
                "Invalid framework '{}' specified. Using default '{}'",
                raw,
                Framework::default()
            ),
        }
    }

    if let Some(framework) = env.and_then(|raw| raw.parse::<Framework>().ok()) {
        info!("Framework set to '{}' via environment variable", framework);
        return FrameworkSelection {
            framework,
            source: SelectionSource::Environment,
        };
    }

    info!("Using default framework: '{}'", Framework::default());
    FrameworkSelection {
        framework: Framework::default(),
        source: SelectionSource::Default,
    }
}

/// Log the selected framework and how to switch
pub fn log_framework_selection(framework: Framework) {
    let info = framework.info();

    info!("MCP Server configured for {} framework", framework.as_str().to_uppercase());
    info!("Repository: {}", info.repository);
    info!("File extension: {}", info.file_extension);
    info!("Description: {}", info.description);

    let others = framework.alternatives();
    info!(
        "To switch frameworks: set FRAMEWORK={} or use --framework {}",
        others, others
    );
}

/// Component source for a framework
pub fn catalog_for(framework: Framework, root: CatalogRoot) -> Arc<dyn ComponentSource> {
    match framework {
        Framework::React | Framework::Svelte | Framework::Vue => Arc::new(LocalCatalog::new(root)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_framework() {
        assert_eq!("react".parse::<Framework>().unwrap(), Framework::React);
        assert_eq!("Svelte".parse::<Framework>().unwrap(), Framework::Svelte);
        assert_eq!(" VUE ".parse::<Framework>().unwrap(), Framework::Vue);
        assert!("angular".parse::<Framework>().is_err());
    }

    #[test]
    fn test_cli_wins_over_env() {
        let selection = select_framework(Some("vue"), Some("svelte"));
        assert_eq!(selection.framework, Framework::Vue);
        assert_eq!(selection.source, SelectionSource::CommandLine);
    }

    #[test]
    fn test_invalid_cli_falls_through_to_env() {
        let selection = select_framework(Some("angular"), Some("svelte"));
        assert_eq!(selection.framework, Framework::Svelte);
        assert_eq!(selection.source, SelectionSource::Environment);
    }

    #[test]
    fn test_default_is_react() {
        let selection = select_framework(None, Some("solid"));
        assert_eq!(selection.framework, Framework::React);
        assert_eq!(selection.source, SelectionSource::Default);

        assert_eq!(select_framework(None, None).framework, Framework::React);
    }

    #[test]
    fn test_framework_info() {
        assert_eq!(Framework::React.info().file_extension, ".tsx");
        assert_eq!(Framework::Vue.info().file_extension, ".vue");
        assert!(Framework::Svelte.info().repository.ends_with("(future)"));
        assert_eq!(Framework::React.alternatives(), "svelte|vue");
    }

    #[tokio::test]
    async fn test_every_framework_gets_the_local_catalog() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("ui")).unwrap();
        std::fs::write(dir.path().join("ui/button.tsx"), "export {}\n").unwrap();

        for framework in [Framework::React, Framework::Svelte, Framework::Vue] {
            let source = catalog_for(framework, CatalogRoot::new(dir.path()));
            assert_eq!(source.component_source("button").await.unwrap(), "export {}\n");
        }
    }
}
