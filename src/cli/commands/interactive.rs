use std::io::{BufRead, Write};

use super::CommandHandler;
use crate::catalog::{
    apply_batch, derive_version, is_valid_link, parse_version, Addition, Catalog, Registry,
    ValidationError, DESCRIPTION_KEY,
};
use crate::notify::{Level, Notifier};
use crate::Result;

/// Typing this (or nothing) at the section, key or link prompt ends the session
pub const EXIT_SENTINEL: &str = "exit";

/// Outcome of collecting one entry from the operator
#[derive(Debug, PartialEq, Eq)]
enum Step {
    Entry(Addition),
    Retry,
    Exit,
}

/// The line-prompt wizard
///
/// Each confirmed entry is saved (registry and README) before the next
/// prompt, so quitting mid-entry only loses the entry being typed.
pub struct InteractiveCommand<R, W> {
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveCommand<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Consume the command, handing back the output (for inspection in tests)
    pub fn into_output(self) -> W {
        self.output
    }

    fn greet(&self, registry: &Registry, notifier: &dyn Notifier) {
        notifier.notify(Level::Success, "Welcome to Arc Boosts Manager!");
        notifier.notify(
            Level::Info,
            "To add a new boost, enter its section, key, link and version.",
        );
        notifier.notify(
            Level::Info,
            &format!("Type \"{EXIT_SENTINEL}\" (or press Enter) at any prompt to finish."),
        );

        let current: Vec<String> = registry
            .sections()
            .flat_map(|(section, s)| s.entries.keys().map(move |key| format!("{section}/{key}")))
            .collect();
        let listing = if current.is_empty() {
            "none".to_string()
        } else {
            current.join(", ")
        };
        notifier.notify(Level::Info, &format!("Current boosts: {listing}"));
    }

    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`ask`](Self::ask), but treats blank input and the sentinel as exit
    fn ask_or_exit(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self
            .ask(prompt)?
            .filter(|answer| !answer.is_empty() && answer != EXIT_SENTINEL))
    }

    fn collect_entry(&mut self, registry: &Registry, notifier: &dyn Notifier) -> Result<Step> {
        let Some(section) = self.ask_or_exit("Section: ")? else {
            return Ok(Step::Exit);
        };

        let mut description = None;
        if registry.section(&section).is_none() {
            let prompt = format!("Description for new section \"{section}\" (optional): ");
            match self.ask(&prompt)? {
                None => return Ok(Step::Exit),
                Some(text) if !text.is_empty() => description = Some(text),
                Some(_) => {}
            }
        }

        let Some(key) = self.ask_or_exit("Key: ")? else {
            return Ok(Step::Exit);
        };
        if key == DESCRIPTION_KEY {
            notifier.notify(
                Level::Error,
                &format!("{} Try again!", ValidationError::ReservedKey(key)),
            );
            return Ok(Step::Retry);
        }

        let Some(link) = self.ask_or_exit(&format!("Link for \"{key}\": "))? else {
            return Ok(Step::Exit);
        };
        if !is_valid_link(&link) {
            notifier.notify(
                Level::Error,
                &format!("Error: {} Try again!", ValidationError::InvalidLink(link)),
            );
            return Ok(Step::Retry);
        }

        let existing = registry.entry(&section, &key);
        let suggested = match derive_version(existing.map(|e| e.version.as_str())) {
            Ok(version) | Err((_, version)) => version,
        };
        let Some(version) = self.ask(&format!("Version for \"{key}\" [{suggested}]: "))? else {
            return Ok(Step::Exit);
        };
        if !version.is_empty() && parse_version(&version).is_err() {
            notifier.notify(
                Level::Error,
                &format!("Error: {} Try again!", ValidationError::InvalidVersion(version)),
            );
            return Ok(Step::Retry);
        }

        let mut addition = Addition::new(section, key, link, Some(version));
        addition.description = description;
        Ok(Step::Entry(addition))
    }
}

impl<R: BufRead, W: Write> CommandHandler for InteractiveCommand<R, W> {
    fn execute(&mut self, notifier: &dyn Notifier) -> Result<()> {
        let mut registry = self.catalog.load(notifier);
        self.greet(&registry, notifier);

        loop {
            let addition = match self.collect_entry(&registry, notifier)? {
                Step::Entry(addition) => addition,
                Step::Retry => continue,
                Step::Exit => break,
            };

            match apply_batch(&registry, std::slice::from_ref(&addition), notifier) {
                Ok(updated) => {
                    self.catalog.save(&updated, notifier)?;
                    notifier.notify(Level::Success, "Added 1 new boost(s)");
                    registry = updated;
                }
                Err(rejected) => {
                    notifier.notify(Level::Error, &format!("Error: {} Try again!", rejected.error));
                }
            }
        }

        // Ends the prompt line left open by the last question
        writeln!(self.output)?;
        notifier.notify(Level::Success, "Exiting...");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "interactive"
    }
}
