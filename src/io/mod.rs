pub mod paths;

pub use paths::CatalogPaths;
