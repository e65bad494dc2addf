//! Boost catalog: registry model, persistence, mutation and rendering
//!
//! ```text
//! Addition(s) ──► apply_batch ──► Registry (new snapshot)
//!                                    │
//!                                    ├──► RegistryStore::persist ──► arc-boosts.json
//!                                    └──► Renderer::render ───────► README.md
//! ```

pub mod link;
pub mod mutation;
pub mod registry;
pub mod render;
pub mod store;
pub mod version;

pub use link::{is_valid_link, LINK_PREFIX};
pub use mutation::{apply_batch, save, Addition, BatchRejected, Catalog, DocumentSink, ValidationError};
pub use registry::{Entry, Registry, Section, DESCRIPTION_KEY};
pub use render::{render, RenderOptions, Renderer};
pub use store::RegistryStore;
pub use version::{derive_version, next_version, parse_version, Version, VersionError};
