pub mod add;
pub mod interactive;
pub mod sync;

use crate::notify::Notifier;
use crate::Result;

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command, reporting progress through `notifier`
    fn execute(&mut self, notifier: &dyn Notifier) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}
