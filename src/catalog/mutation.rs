//! Batch mutation and the save transaction
//!
//! [`apply_batch`] folds additions into a copy of the registry and never
//! touches the caller's snapshot. [`save`] writes the registry and then the
//! regenerated document.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::link::{is_valid_link, LINK_PREFIX};
use super::registry::DESCRIPTION_KEY;
use super::render::Renderer;
use super::store::{write_atomically, RegistryStore};
use super::version::{derive_version, parse_version};
use super::{Entry, Registry};
use crate::io::CatalogPaths;
use crate::notify::{Level, Notifier};
use crate::Result;

/// Why a single addition was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Section name must not be empty")]
    EmptySection,

    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Key \"{0}\" is reserved for the section description")]
    ReservedKey(String),

    #[error("Invalid link \"{0}\". Link must be in the format {prefix}*", prefix = LINK_PREFIX)]
    InvalidLink(String),

    #[error("Invalid version \"{0}\". Version must look like 1.0.0")]
    InvalidVersion(String),
}

/// One pending add-or-overwrite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    pub section: String,
    pub key: String,
    pub link: String,
    /// `None` or blank derives the version from the existing entry
    pub version: Option<String>,
    /// Only used while the section has no description yet
    pub description: Option<String>,
}

impl Addition {
    pub fn new(
        section: impl Into<String>,
        key: impl Into<String>,
        link: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            section: section.into(),
            key: key.into(),
            link: link.into(),
            version,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check everything that does not depend on the registry
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.section.trim().is_empty() {
            return Err(ValidationError::EmptySection);
        }
        if self.key.trim().is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        if self.key == DESCRIPTION_KEY {
            return Err(ValidationError::ReservedKey(self.key.clone()));
        }
        if !is_valid_link(&self.link) {
            return Err(ValidationError::InvalidLink(self.link.clone()));
        }
        if let Some(version) = self.explicit_version() {
            parse_version(version)
                .map_err(|_| ValidationError::InvalidVersion(version.to_string()))?;
        }
        Ok(())
    }

    fn explicit_version(&self) -> Option<&str> {
        self.version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// A batch stopped at an invalid addition
///
/// `partial` holds every addition before `index`; whether to persist it is
/// the caller's call.
#[derive(Error, Debug, Clone)]
#[error("Addition #{} ({section}/{key}) rejected: {error}", .index + 1)]
pub struct BatchRejected {
    pub index: usize,
    pub section: String,
    pub key: String,
    #[source]
    pub error: ValidationError,
    pub partial: Registry,
}

/// Apply `additions` in order to a copy of `registry`
///
/// Derived versions are computed from `registry` as it was before the
/// batch, so two blank-version additions of the same key in one batch get
/// the same version.
pub fn apply_batch(
    registry: &Registry,
    additions: &[Addition],
    notifier: &dyn Notifier,
) -> std::result::Result<Registry, BatchRejected> {
    let mut updated = registry.clone();

    for (index, addition) in additions.iter().enumerate() {
        if let Err(error) = addition.validate() {
            tracing::debug!(index, error = %error, "Batch stopped at invalid addition");
            return Err(BatchRejected {
                index,
                section: addition.section.clone(),
                key: addition.key.clone(),
                error,
                partial: updated,
            });
        }

        let version = resolve_version(registry, addition, notifier);
        let description = addition
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let section = updated.section_or_insert(&addition.section, description.clone());
        if section.description.is_none() {
            section.description = description;
        }

        let mut entry = Entry::new(addition.link.clone(), version);
        if let Some(previous) = section.entries.get(&addition.key) {
            entry.extra = previous.extra.clone();
        }
        if section.entries.insert(addition.key.clone(), entry).is_some() {
            notifier.notify(
                Level::Warning,
                &format!(
                    "Warning: Key \"{}\" already exists in \"{}\" and was overwritten.",
                    addition.key, addition.section
                ),
            );
        }
    }

    tracing::debug!(count = additions.len(), "Applied batch");
    Ok(updated)
}

fn resolve_version(pre_batch: &Registry, addition: &Addition, notifier: &dyn Notifier) -> String {
    if let Some(explicit) = addition.explicit_version() {
        return explicit.to_string();
    }

    let existing = pre_batch
        .entry(&addition.section, &addition.key)
        .map(|entry| entry.version.as_str());

    match derive_version(existing) {
        Ok(version) => version.to_string(),
        Err((error, seed)) => {
            notifier.notify(
                Level::Warning,
                &format!(
                    "Stored version of \"{}\" is unusable ({error}); starting again at {seed}.",
                    addition.key
                ),
            );
            seed.to_string()
        }
    }
}

/// Where the rendered document goes
#[derive(Debug, Clone)]
pub struct DocumentSink {
    path: PathBuf,
}

impl DocumentSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, document: &str) -> Result<()> {
        write_atomically(&self.path, document.as_bytes())
    }
}

/// Everything a save needs, resolved once per invocation
#[derive(Debug, Clone)]
pub struct Catalog {
    pub store: RegistryStore,
    pub sink: DocumentSink,
    pub renderer: Renderer,
}

impl Catalog {
    pub fn new(paths: &CatalogPaths, renderer: Renderer) -> Self {
        Self {
            store: RegistryStore::new(&paths.registry_file),
            sink: DocumentSink::new(&paths.document_file),
            renderer,
        }
    }

    pub fn load(&self, notifier: &dyn Notifier) -> Registry {
        self.store.load(notifier)
    }

    /// Persist `registry` and regenerate the document
    pub fn save(&self, registry: &Registry, notifier: &dyn Notifier) -> Result<()> {
        save(&self.store, &self.sink, &self.renderer, registry, notifier)
    }

    /// Regenerate the document from `registry` without touching the store
    pub fn regenerate(&self, registry: &Registry, notifier: &dyn Notifier) -> Result<()> {
        self.sink.write(&self.renderer.render(registry))?;
        notifier.notify(
            Level::Success,
            &format!("{} generated successfully!", self.sink.path().display()),
        );
        Ok(())
    }
}

/// The save transaction: registry first, then the document
pub fn save(
    store: &RegistryStore,
    sink: &DocumentSink,
    renderer: &Renderer,
    registry: &Registry,
    notifier: &dyn Notifier,
) -> Result<()> {
    store.persist(registry)?;
    notifier.notify(
        Level::Success,
        &format!(
            "Saved {} boost(s) in {} section(s) to {}",
            registry.entry_count(),
            registry.section_count(),
            store.path().display()
        ),
    );

    sink.write(&renderer.render(registry))?;
    notifier.notify(
        Level::Success,
        &format!("{} generated successfully!", sink.path().display()),
    );
    Ok(())
}
