//! Catalog root discovery
//!
//! The server can be launched as a locally built binary, from an
//! installed package, or through a package-runner shim. Each of those
//! puts the `components/` directory somewhere different relative to the
//! executable, so the resolver walks a fixed list of candidates and takes
//! the first one that carries a `registry.json`.
//!
//! Resolution never fails. When nothing matches, a best-effort default is
//! returned and the problem surfaces later as not-found errors on the
//! individual lookups.

use std::path::{Component, Path, PathBuf};

use tracing::{error, info, warn};

/// Name of the catalog directory
pub const CATALOG_DIR_NAME: &str = "components";

/// Registry document inside the catalog root
pub const REGISTRY_FILE_NAME: &str = "registry.json";

/// Demo directory inside the catalog root
pub const EXAMPLES_DIR_NAME: &str = "examples";

/// One of the two parallel implementation directories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Regular UI components
    Ui,
    /// Decorative star components
    Stars,
}

impl Tier {
    /// Tiers in lookup priority order
    pub const SEARCH_ORDER: [Tier; 2] = [Tier::Ui, Tier::Stars];

    /// Directory name of the tier
    pub fn dir_name(&self) -> &'static str {
        match self {
            Tier::Ui => "ui",
            Tier::Stars => "stars",
        }
    }
}

/// Resolved catalog directory, immutable for the process lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRoot {
    path: PathBuf,
}

impl CatalogRoot {
    /// Wrap an already-known catalog directory
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Implementation directory for a tier
    pub fn tier_dir(&self, tier: Tier) -> PathBuf {
        self.path.join(tier.dir_name())
    }

    /// Demo directory for a tier
    pub fn examples_dir(&self, tier: Tier) -> PathBuf {
        self.path.join(EXAMPLES_DIR_NAME).join(tier.dir_name())
    }

    pub fn registry_file(&self) -> PathBuf {
        self.path.join(REGISTRY_FILE_NAME)
    }

    /// Whether a registry document sits directly inside the root
    pub fn has_registry(&self) -> bool {
        self.registry_file().exists()
    }
}

/// Locates the catalog root from the program and working directories
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Directory holding the running executable
    program_dir: PathBuf,

    /// Working directory at startup
    working_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver over explicit base directories
    pub fn new<P: Into<PathBuf>, W: Into<PathBuf>>(program_dir: P, working_dir: W) -> Self {
        Self {
            program_dir: program_dir.into(),
            working_dir: working_dir.into(),
        }
    }

    /// Create a resolver from the current executable and working directory
    pub fn from_process() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_else(|e| {
            warn!("Could not determine working directory: {}", e);
            PathBuf::from(".")
        });

        let program_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| {
                warn!("Could not determine executable directory, using working directory");
                working_dir.clone()
            });

        Self::new(program_dir, working_dir)
    }

    /// Candidate catalog roots in priority order
    ///
    /// The order encodes deployment-shape priority and must not change:
    /// 1. `<program>/../components`       local build
    /// 2. `<program>/components`          bundled next to the binary
    /// 3. `<program>/../../components`    global install
    /// 4. `<program>/../../../components` package-runner shim
    /// 5. `<cwd>/components`
    /// 6. `<cwd>/build/components`
    pub fn candidates(&self) -> Vec<PathBuf> {
        let raw = [
            self.program_dir.join("..").join(CATALOG_DIR_NAME),
            self.program_dir.join(CATALOG_DIR_NAME),
            self.program_dir.join("..").join(CATALOG_DIR_NAME),
            self.program_dir.join("../..").join(CATALOG_DIR_NAME),
            self.program_dir.join("../../..").join(CATALOG_DIR_NAME),
            self.working_dir.join(CATALOG_DIR_NAME),
            self.working_dir.join("build").join(CATALOG_DIR_NAME),
        ];

        let mut candidates: Vec<PathBuf> = Vec::with_capacity(raw.len());
        for path in raw.iter().map(|p| normalize(p)) {
            if !candidates.contains(&path) {
                candidates.push(path);
            }
        }
        candidates
    }

    /// Catalog directory bundled directly beside the executable
    pub fn bundled_dir(&self) -> PathBuf {
        normalize(&self.program_dir.join(CATALOG_DIR_NAME))
    }

    /// Last-resort root, returned whether or not it exists
    pub fn default_dir(&self) -> PathBuf {
        normalize(&self.program_dir.join("..").join(CATALOG_DIR_NAME))
    }

    /// Resolve the catalog root
    ///
    /// The first candidate that is a directory holding a registry wins.
    /// Without any registry, the bundled directory is accepted if it
    /// exists. Otherwise the default path is returned and the failure is
    /// logged.
    pub fn resolve(&self) -> CatalogRoot {
        let candidates = self.candidates();

        if let Some(found) = candidates
            .iter()
            .find(|path| path.is_dir() && path.join(REGISTRY_FILE_NAME).exists())
        {
            info!("Found components directory at: {}", found.display());
            return CatalogRoot::new(found.clone());
        }

        let bundled = self.bundled_dir();
        if bundled.exists() {
            info!("Using bundled components directory at: {}", bundled.display());
            return CatalogRoot::new(bundled);
        }

        let fallback = self.default_dir();
        let tried: Vec<String> = candidates.iter().map(|p| p.display().to_string()).collect();
        error!(
            "Could not find components directory. Tried paths: {}",
            tried.join(", ")
        );
        error!("Falling back to: {}", fallback.display());
        CatalogRoot::new(fallback)
    }
}

/// Lexically resolve `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
