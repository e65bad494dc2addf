use super::CommandHandler;
use crate::catalog::Catalog;
use crate::notify::Notifier;
use crate::Result;

/// Handler for `-s`: regenerate the README from the saved registry
pub struct SyncCommand {
    catalog: Catalog,
}

impl SyncCommand {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CommandHandler for SyncCommand {
    fn execute(&mut self, notifier: &dyn Notifier) -> Result<()> {
        let registry = self.catalog.load(notifier);
        self.catalog.regenerate(&registry, notifier)
    }

    fn name(&self) -> &'static str {
        "sync"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{render, Renderer};
    use crate::io::CatalogPaths;
    use crate::notify::NullNotifier;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sync_renders_without_touching_registry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::for_project(temp_dir.path());
        let json = "{\n  \"Tools\": {\"foo\": {\"link\": \"https://arc.net/boost/foo\", \"version\": \"1.0.0\"}}\n}";
        fs::write(&paths.registry_file, json).unwrap();
        let catalog = Catalog::new(&paths, Renderer::default());

        SyncCommand::new(catalog.clone()).execute(&NullNotifier).unwrap();

        // The hand-written formatting survives: sync never rewrites the registry
        assert_eq!(fs::read_to_string(&paths.registry_file).unwrap(), json);
        let expected = render(&catalog.store.try_load().unwrap().unwrap());
        assert_eq!(fs::read_to_string(&paths.document_file).unwrap(), expected);
    }

    #[test]
    fn test_sync_without_registry_renders_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::for_project(temp_dir.path());
        let catalog = Catalog::new(&paths, Renderer::default());

        SyncCommand::new(catalog).execute(&NullNotifier).unwrap();

        let readme = fs::read_to_string(&paths.document_file).unwrap();
        assert!(readme.starts_with("# Arc Boosts"));
        assert!(!readme.contains("## "));
        assert!(!paths.registry_file.exists());
    }
}
