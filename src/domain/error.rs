use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::BuildStep;

/// Library-wide error type for noetherian operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Document name cannot be mapped onto `<name>.tex`.
    #[error("Invalid document name '{0}': expected a base name such as 'paper'")]
    InvalidDocumentName(String),

    /// A required input file is absent from the project root.
    #[error("{what} not found: {}", .path.display())]
    MissingInput { what: String, path: PathBuf },

    /// External tool could not be started.
    #[error("Failed to run '{program}': {details}")]
    ToolSpawn { program: String, details: String },

    /// A step failed and the failure policy asked to stop.
    #[error("{step} failed: {details}")]
    StepFailed { step: BuildStep, details: String },

    /// No output document was produced in the artifacts directory.
    #[error("No output document to publish: {} does not exist", .0.display())]
    OutputMissing(PathBuf),

    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// Configuration values are present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }
}
