use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::ValidationError;

#[derive(Error, Debug)]
pub enum BoostsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed registry document {}: {source}", .path.display())]
    MalformedDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("{0:#}")]
    Generic(#[from] anyhow::Error),
}

impl BoostsError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            BoostsError::Usage(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BoostsError>;
