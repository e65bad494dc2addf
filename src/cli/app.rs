use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::catalog::Addition;
use crate::{BoostsError, Result};

/// Arc Boosts: keep a versioned list of Arc boosts and a README for it
#[derive(Parser, Debug)]
#[command(name = "arc-boosts")]
#[command(version)]
#[command(about = "Keep a versioned list of Arc boosts and generate a README for it")]
#[command(
    long_about = "Keep a versioned list of Arc boosts and generate a README for it.\n\nRun without arguments to add boosts interactively."
)]
pub struct Cli {
    /// Add or overwrite a single boost
    #[arg(
        short = 'a',
        long = "add",
        num_args = 4,
        value_names = ["SECTION", "KEY", "LINK", "VERSION"],
        action = ArgAction::Set,
        conflicts_with = "sync"
    )]
    pub add: Option<Vec<String>>,

    /// Description for the section, used only if it has none yet
    #[arg(short = 'd', long, requires = "add")]
    pub description: Option<String>,

    /// Regenerate the README from the saved registry
    #[arg(short = 's', long)]
    pub sync: bool,

    /// Registry JSON file (overrides the settings file)
    #[arg(long, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Generated README file (overrides the settings file)
    #[arg(long, value_name = "FILE")]
    pub document: Option<PathBuf>,

    /// Settings file (default: ./arc-boosts.yaml, then the user config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics on stderr
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Add(Addition),
    Sync,
}

impl Cli {
    /// Decide the mode from the flags
    ///
    /// clap already rejects a short `-a` and `-a` with `-s` when parsing.
    /// The fields are public, so a `Cli` built or edited in code is checked
    /// again here.
    pub fn mode(&self) -> Result<Mode> {
        match (&self.add, self.sync) {
            (Some(values), false) => match values.as_slice() {
                [section, key, link, version] => {
                    let mut addition = Addition::new(
                        section.as_str(),
                        key.as_str(),
                        link.as_str(),
                        Some(version.clone()),
                    );
                    addition.description = self.description.clone();
                    Ok(Mode::Add(addition))
                }
                _ => Err(BoostsError::Usage(
                    "-a expects <SECTION> <KEY> <LINK> <VERSION>".to_string(),
                )),
            },
            (None, true) => Ok(Mode::Sync),
            (None, false) => Ok(Mode::Interactive),
            (Some(_), true) => Err(BoostsError::Usage(
                "-a and -s cannot be combined".to_string(),
            )),
        }
    }
}
