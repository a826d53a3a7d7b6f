//! # Neobrutalism Core
//!
//! Resolution of the local neobrutalism component catalog:
//!
//! - **PathResolver**: finds the `components/` directory across the ways the
//!   server can be deployed
//! - **RegistryStore**: loads `registry.json` once and shares it
//! - **ComponentResolver**: source, demo and metadata lookups by name
//! - **CatalogLister**: every known component name
//! - **DirectoryDescriber**: static description of the catalog layout
//!
//! ## Catalog layout
//!
//! ```text
//! components/
//! ├── registry.json        # { "items": [ComponentEntry, ...] }
//! ├── ui/<name>.tsx        # searched first
//! ├── stars/<name>.tsx     # decorative variants
//! └── examples/
//!     ├── ui/<name>.tsx
//!     ├── ui/<name>/index.tsx
//!     └── stars/<name>.tsx
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use neobrutal_core::{ComponentSource, LocalCatalog, PathResolver};
//!
//! # async fn run() -> neobrutal_core::Result<()> {
//! let root = PathResolver::from_process().resolve();
//! let catalog = LocalCatalog::new(root);
//!
//! for name in catalog.list_components().await {
//!     println!("{}", name);
//! }
//! let button = catalog.component_source("Button").await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod describe;
pub mod error;
pub mod framework;
pub mod lister;
pub mod paths;
pub mod registry;
pub mod resolver;

pub use catalog::{ComponentSource, LocalCatalog};
pub use describe::{DirectoryDescriber, DirectoryDescription, NodeKind};
pub use error::{CatalogError, ErrorCategory, Result};
pub use framework::{
    catalog_for, log_framework_selection, select_framework, Framework, FrameworkInfo,
    FrameworkSelection, SelectionSource,
};
pub use lister::CatalogLister;
pub use paths::{CatalogRoot, PathResolver, Tier};
pub use registry::{
    ComponentEntry, ComponentExample, ComponentFile, ComponentProp, Registry, RegistryStore,
};
pub use resolver::{component_file_stem, ComponentResolver};
