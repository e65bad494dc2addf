use super::CommandHandler;
use crate::catalog::{apply_batch, parse_version, Addition, Catalog, ValidationError};
use crate::notify::{Level, Notifier};
use crate::Result;

/// Handler for `-a <section> <key> <link> <version>`
///
/// Unlike the interactive flow, the version is mandatory here. Nothing is
/// written unless the addition is valid.
pub struct AddCommand {
    catalog: Catalog,
    addition: Addition,
}

impl AddCommand {
    pub fn new(catalog: Catalog, addition: Addition) -> Self {
        Self { catalog, addition }
    }

    fn check_version(&self) -> std::result::Result<(), ValidationError> {
        let version = self.addition.version.as_deref().unwrap_or("");
        parse_version(version.trim())
            .map(|_| ())
            .map_err(|_| ValidationError::InvalidVersion(version.to_string()))
    }
}

impl CommandHandler for AddCommand {
    fn execute(&mut self, notifier: &dyn Notifier) -> Result<()> {
        self.addition.validate()?;
        self.check_version()?;

        let registry = self.catalog.load(notifier);
        let updated = apply_batch(&registry, std::slice::from_ref(&self.addition), notifier)
            .map_err(|rejected| rejected.error)?;

        self.catalog.save(&updated, notifier)?;
        notifier.notify(Level::Success, "Added 1 new boost(s)");

        tracing::info!(
            section = %self.addition.section,
            key = %self.addition.key,
            "Boost added"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "add"
    }
}
