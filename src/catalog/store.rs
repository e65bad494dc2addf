//! Registry persistence (arc-boosts.json)
//!
//! The registry lives in a single pretty-printed JSON document so it can be
//! edited by hand between runs. Every save rewrites the whole file through a
//! temporary file in the same directory, so a failed write never leaves a
//! half-written registry behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use super::Registry;
use crate::notify::{Level, Notifier};
use crate::{BoostsError, Result};

/// Loads and persists a [`Registry`] at a fixed path
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the registry, reporting a malformed document as an error
    ///
    /// Returns `Ok(None)` when no document exists yet.
    pub fn try_load(&self) -> Result<Option<Registry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BoostsError::Io(e)),
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| BoostsError::MalformedDocument {
                path: self.path.clone(),
                source,
            })
    }

    /// Read the registry, degrading to an empty one on any problem
    ///
    /// A missing file is normal on first use. An unreadable or malformed
    /// file is reported as an error notice; the next save will replace it.
    pub fn load(&self, notifier: &dyn Notifier) -> Registry {
        match self.try_load() {
            Ok(Some(registry)) => {
                tracing::debug!(
                    path = %self.path.display(),
                    sections = registry.section_count(),
                    entries = registry.entry_count(),
                    "Loaded registry"
                );
                registry
            }
            Ok(None) => {
                notifier.notify(
                    Level::Info,
                    &format!(
                        "No registry found at {}. A new one will be created after adding boosts.",
                        self.path.display()
                    ),
                );
                Registry::new()
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Registry load failed");
                notifier.notify(
                    Level::Error,
                    &format!("Could not read registry, starting from an empty one: {e}"),
                );
                Registry::new()
            }
        }
    }

    /// Overwrite the document with the full registry
    pub fn persist(&self, registry: &Registry) -> Result<()> {
        let mut content = serde_json::to_string_pretty(registry)?;
        content.push('\n');
        write_atomically(&self.path, content.as_bytes())?;

        tracing::debug!(
            path = %self.path.display(),
            entries = registry.entry_count(),
            "Persisted registry"
        );
        Ok(())
    }
}

/// Mode for files that do not exist yet, before the umask applies
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Replace `path` with `contents` via a sibling temp file and a rename
///
/// The replacement keeps the permissions of the file it replaces. A new
/// file gets the usual `0644` (less the umask) instead of the private mode
/// temp files are created with.
pub(crate) fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let persist_err = |source: std::io::Error| BoostsError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(persist_err)?;

    let existing = match fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => return Err(persist_err(e)),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    if existing.is_none() {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }
    let mut file = builder.tempfile_in(parent).map_err(persist_err)?;

    // Set after creation so the umask cannot narrow the preserved mode
    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(persist_err)?;
    }

    file.write_all(contents).map_err(persist_err)?;
    file.as_file().sync_all().map_err(persist_err)?;
    file.persist(path).map_err(|e| persist_err(e.error))?;

    Ok(())
}
