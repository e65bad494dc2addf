pub mod loader;
pub mod types;

pub use loader::{LoadedSettings, SettingsLoader};
pub use types::Settings;
