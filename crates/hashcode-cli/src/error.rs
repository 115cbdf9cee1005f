//! Error types for the hashcode command line

use hashcode::{ConfigError, FieldResolutionError};
use thiserror::Error;

/// Errors that end the menu loop.
#[derive(Debug, Error)]
pub enum CliError {
    /// Terminal input or output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A configured selector names an unknown field.
    #[error(transparent)]
    FieldResolution(#[from] FieldResolutionError),
}
