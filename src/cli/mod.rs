pub mod app;
pub mod commands;

pub use app::{Cli, LogLevel, Mode};

use std::path::Path;

use self::commands::{
    add::AddCommand, interactive::InteractiveCommand, sync::SyncCommand, CommandHandler,
};
use crate::catalog::{Catalog, Renderer};
use crate::config::SettingsLoader;
use crate::io::paths::resolve_against;
use crate::notify::Notifier;
use crate::Result;

/// Resolve settings for `working_dir` and the CLI overrides into a catalog
pub fn build_catalog(cli: &Cli, working_dir: &Path) -> Result<Catalog> {
    let loaded = SettingsLoader::new(working_dir).load(cli.config.as_deref())?;
    let paths = loaded.settings.paths(working_dir).with_overrides(
        cli.registry.as_deref().map(|p| resolve_against(working_dir, p)),
        cli.document.as_deref().map(|p| resolve_against(working_dir, p)),
    );

    tracing::debug!(
        settings = ?loaded.source,
        registry = %paths.registry_file.display(),
        document = %paths.document_file.display(),
        "Resolved catalog paths"
    );
    Ok(Catalog::new(
        &paths,
        Renderer::new(loaded.settings.render_options()),
    ))
}

/// Dispatch a parsed command line
pub fn run(cli: &Cli, notifier: &dyn Notifier) -> Result<()> {
    // Validate the argument shape before touching any file
    let mode = cli.mode()?;
    let working_dir = std::env::current_dir()?;
    let catalog = build_catalog(cli, &working_dir)?;

    let mut command: Box<dyn CommandHandler> = match mode {
        Mode::Interactive => {
            let stdin = std::io::stdin();
            Box::new(InteractiveCommand::new(
                catalog,
                stdin.lock(),
                std::io::stdout(),
            ))
        }
        Mode::Add(addition) => Box::new(AddCommand::new(catalog, addition)),
        Mode::Sync => Box::new(SyncCommand::new(catalog)),
    };

    tracing::debug!(command = command.name(), "Executing command");
    command.execute(notifier)
}
