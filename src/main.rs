use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use arc_boosts::cli::{self, Cli, LogLevel};
use arc_boosts::notify::{ConsoleNotifier, Level, Notifier};

/// Initialize tracing from --log-level, letting RUST_LOG take precedence
fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    // Diagnostics go to stderr so stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let notifier = ConsoleNotifier::detect(cli.no_color);

    match cli::run(&cli, &notifier) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            notifier.notify(Level::Error, &format!("Error: {e}"));
            ExitCode::from(e.exit_code())
        }
    }
}
