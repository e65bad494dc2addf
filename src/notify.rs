//! Operator-facing messages
//!
//! The catalog code reports what it did through a [`Notifier`]; how the
//! message reaches the operator (coloured console, memory, nowhere) is up to
//! the implementation.

use std::cell::RefCell;
use std::io::{IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn ansi_color(self) -> Option<&'static str> {
        match self {
            Level::Info => None,
            Level::Success => Some("\u{1b}[32m"),
            Level::Warning => Some("\u{1b}[33m"),
            Level::Error => Some("\u{1b}[31m"),
        }
    }
}

pub trait Notifier {
    fn notify(&self, level: Level, message: &str);
}

/// Prints to the terminal: info/success on stdout, warnings/errors on stderr
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    color: bool,
}

impl ConsoleNotifier {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Colour only when stdout is a terminal and `NO_COLOR` is unset
    pub fn detect(no_color_flag: bool) -> Self {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color_flag && !no_color_env && std::io::stdout().is_terminal())
    }

    fn format(&self, level: Level, message: &str) -> String {
        match level.ansi_color() {
            Some(code) if self.color => format!("{code}{message}\u{1b}[0m"),
            _ => message.to_string(),
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, level: Level, message: &str) {
        let line = self.format(level, message);
        // A closed pipe is not worth aborting a save over
        let _ = match level {
            Level::Info | Level::Success => writeln!(std::io::stdout(), "{line}"),
            Level::Warning | Level::Error => writeln!(std::io::stderr(), "{line}"),
        };
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _level: Level, _message: &str) {}
}

/// Keeps every message in memory
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    messages: RefCell<Vec<(Level, String)>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    pub fn count(&self, level: Level) -> usize {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    /// Whether any message at `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.messages
            .borrow()
            .iter()
            .any(|(l, m)| *l == level && m.contains(needle))
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}
