use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Default registry file name, relative to the working directory
pub const DEFAULT_REGISTRY_FILE: &str = "arc-boosts.json";
/// Default rendered document, relative to the working directory
pub const DEFAULT_DOCUMENT_FILE: &str = "README.md";
/// Project-local settings file name
pub const PROJECT_SETTINGS_FILE: &str = "arc-boosts.yaml";

/// Resolved locations of the registry and the rendered document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub registry_file: PathBuf,
    pub document_file: PathBuf,
}

impl CatalogPaths {
    /// Default file names inside a project directory
    pub fn for_project(project_root: &Path) -> Self {
        Self {
            registry_file: project_root.join(DEFAULT_REGISTRY_FILE),
            document_file: project_root.join(DEFAULT_DOCUMENT_FILE),
        }
    }

    /// Replace either path with an explicit override
    pub fn with_overrides(mut self, registry: Option<PathBuf>, document: Option<PathBuf>) -> Self {
        if let Some(registry) = registry {
            self.registry_file = registry;
        }
        if let Some(document) = document {
            self.document_file = document;
        }
        self
    }

    /// Machine-wide settings file, if the platform has a config directory
    pub fn global_settings_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "arc-boosts").map(|dirs| dirs.config_dir().join("config.yaml"))
    }
}

/// Resolve `path` against `base` unless it is already absolute
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
