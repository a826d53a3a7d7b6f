//! Server configuration

use std::path::PathBuf;

use neobrutal_core::Framework;

use crate::{SERVER_NAME, SERVER_VERSION};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Name reported in `initialize`
    pub name: String,
    /// Version reported in `initialize`
    pub version: String,
    /// Selected component framework
    pub framework: Framework,
    /// Explicit catalog root; skips discovery when set
    pub components_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Create a new configuration builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            framework: Framework::default(),
            components_dir: None,
        }
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    name: Option<String>,
    version: Option<String>,
    framework: Option<Framework>,
    components_dir: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Set the server name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the reported version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the framework
    pub fn framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    /// Use a fixed catalog root
    pub fn components_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.components_dir = dir;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            name: self.name.unwrap_or(defaults.name),
            version: self.version.unwrap_or(defaults.version),
            framework: self.framework.unwrap_or(defaults.framework),
            components_dir: self.components_dir,
        }
    }
}
