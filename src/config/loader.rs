use anyhow::Context;
use std::path::{Path, PathBuf};

use super::types::Settings;
use crate::io::paths::PROJECT_SETTINGS_FILE;
use crate::io::CatalogPaths;
use crate::Result;

/// Settings together with the file they came from
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: Settings,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
}

/// Finds and reads the settings file
///
/// Lookup order: explicit `--config` path, `arc-boosts.yaml` in the working
/// directory, the user config directory, built-in defaults.
pub struct SettingsLoader {
    working_dir: PathBuf,
    global_file: Option<PathBuf>,
}

impl SettingsLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            global_file: CatalogPaths::global_settings_file(),
        }
    }

    /// Use a different machine-wide settings file (or none)
    pub fn with_global_file(mut self, global_file: Option<PathBuf>) -> Self {
        self.global_file = global_file;
        self
    }

    pub fn load(&self, explicit: Option<&Path>) -> Result<LoadedSettings> {
        if let Some(path) = explicit {
            let path = crate::io::paths::resolve_against(&self.working_dir, path);
            return Ok(LoadedSettings {
                settings: Self::read(&path)?,
                source: Some(path),
            });
        }

        let candidates = std::iter::once(self.working_dir.join(PROJECT_SETTINGS_FILE))
            .chain(self.global_file.clone());

        for candidate in candidates {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Using settings file");
                return Ok(LoadedSettings {
                    settings: Self::read(&candidate)?,
                    source: Some(candidate),
                });
            }
        }

        Ok(LoadedSettings {
            settings: Settings::default(),
            source: None,
        })
    }

    fn read(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: Settings = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        Ok(settings)
    }
}
