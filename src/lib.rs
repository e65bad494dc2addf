pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod notify;

pub use error::{BoostsError, Result};
