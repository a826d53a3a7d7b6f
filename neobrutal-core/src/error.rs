//! Error types for catalog operations
//!
//! Every failure carries:
//! - A human-readable message
//! - A stable error code for programmatic handling
//! - A category for grouping
//!
//! Only the not-found and validation categories are meant to reach a
//! caller as-is. `RegistryUnavailable` stays internal: the registry store
//! degrades it to "no registry" after logging.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error category for grouping related errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Requested component or demo is absent from every searched location
    NotFound,
    /// Input rejected before touching the filesystem
    Validation,
    /// Registry missing or unparseable
    Unavailable,
    /// Unexpected filesystem failure
    External,
}

/// Errors that can occur while resolving catalog content
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Component source exists in neither tier
    #[error("Component \"{name}\" not found in local components")]
    ComponentNotFound { name: String },

    /// No demo candidate path exists
    #[error("Demo for component \"{name}\" not found in local examples")]
    DemoNotFound { name: String },

    /// Name cannot be used as a single path segment
    #[error("Invalid component name \"{name}\": {reason}")]
    InvalidComponentName { name: String, reason: String },

    /// Registry file could not be read or parsed
    #[error("Registry unavailable at '{path}': {reason}")]
    RegistryUnavailable { path: String, reason: String },

    /// Read failed for a reason other than absence
    #[error("IO error at '{path}': {message}")]
    Io { path: String, message: String },
}

impl CatalogError {
    /// Returns the error category for grouping
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ComponentNotFound { .. } | CatalogError::DemoNotFound { .. } => {
                ErrorCategory::NotFound
            }
            CatalogError::InvalidComponentName { .. } => ErrorCategory::Validation,
            CatalogError::RegistryUnavailable { .. } => ErrorCategory::Unavailable,
            CatalogError::Io { .. } => ErrorCategory::External,
        }
    }

    /// Returns the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::ComponentNotFound { .. } => "COMPONENT_NOT_FOUND",
            CatalogError::DemoNotFound { .. } => "DEMO_NOT_FOUND",
            CatalogError::InvalidComponentName { .. } => "INVALID_COMPONENT_NAME",
            CatalogError::RegistryUnavailable { .. } => "REGISTRY_UNAVAILABLE",
            CatalogError::Io { .. } => "IO_ERROR",
        }
    }

    /// Returns true if the requested item simply does not exist
    pub fn is_not_found(&self) -> bool {
        self.category() == ErrorCategory::NotFound
    }

    pub(crate) fn io(path: &std::path::Path, err: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_keeps_original_name() {
        let err = CatalogError::ComponentNotFound {
            name: "MyButton".to_string(),
        };

        assert!(err.to_string().contains("MyButton"));
        assert_eq!(err.error_code(), "COMPONENT_NOT_FOUND");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_categories() {
        let invalid = CatalogError::InvalidComponentName {
            name: "../x".to_string(),
            reason: "contains a path separator".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Validation);
        assert!(!invalid.is_not_found());

        let io = CatalogError::Io {
            path: "/tmp/x".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(io.category(), ErrorCategory::External);
        assert_eq!(io.error_code(), "IO_ERROR");
    }
}
