//! Registry data model
//!
//! A registry is a three-level tree: section → entry key → entry. Both maps
//! keep insertion order so the persisted JSON and the rendered document list
//! things in the order they were added (or hand-edited).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section field holding the optional description
///
/// It shares the JSON object with the entry keys, so no entry may use it.
pub const DESCRIPTION_KEY: &str = "description";

/// A single boost: where to get it and which version it is at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub link: String,
    pub version: String,

    /// Hand-added fields, written back untouched
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Entry {
    pub fn new(link: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            version: version.into(),
            extra: IndexMap::new(),
        }
    }
}

/// A named group of entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(flatten)]
    pub entries: IndexMap<String, Entry>,
}

impl Section {
    pub fn with_description(description: Option<String>) -> Self {
        Self {
            description,
            entries: IndexMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The whole catalog, keyed by section name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    sections: IndexMap<String, Section>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Get a section, creating it with `description` if it does not exist
    pub fn section_or_insert(&mut self, name: &str, description: Option<String>) -> &mut Section {
        self.sections
            .entry(name.to_string())
            .or_insert_with(|| Section::with_description(description))
    }

    pub fn entry(&self, section: &str, key: &str) -> Option<&Entry> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    /// Sections in insertion order
    pub fn sections(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of entries across all sections
    pub fn entry_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
