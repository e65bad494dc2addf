use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::render::{DEFAULT_BUTTON_LABEL, DEFAULT_TITLE};
use crate::catalog::RenderOptions;
use crate::io::paths::{resolve_against, DEFAULT_DOCUMENT_FILE, DEFAULT_REGISTRY_FILE};
use crate::io::CatalogPaths;

/// Settings read from arc-boosts.yaml
///
/// Every field is optional in the file; missing ones keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Registry JSON document
    pub registry_file: PathBuf,
    /// Generated Markdown document
    pub document_file: PathBuf,
    /// Top-level heading of the document
    pub title: String,
    /// Text on each boost's button
    pub button_label: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_file: PathBuf::from(DEFAULT_REGISTRY_FILE),
            document_file: PathBuf::from(DEFAULT_DOCUMENT_FILE),
            title: DEFAULT_TITLE.to_string(),
            button_label: DEFAULT_BUTTON_LABEL.to_string(),
        }
    }
}

impl Settings {
    /// File locations, with relative paths resolved against `working_dir`
    pub fn paths(&self, working_dir: &Path) -> CatalogPaths {
        CatalogPaths {
            registry_file: resolve_against(working_dir, &self.registry_file),
            document_file: resolve_against(working_dir, &self.document_file),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            button_label: self.button_label.clone(),
        }
    }
}
