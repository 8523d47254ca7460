use std::path::PathBuf;

use crate::domain::{ColorChoice, DocumentName, FailurePolicy};

/// Per-invocation build request.
///
/// Fields left as `None` fall back to the loaded configuration.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Document to compile.
    pub document: DocumentName,
    /// Explicit config file; when absent `noetherian.toml` is used if present.
    pub config_path: Option<PathBuf>,
    pub on_failure: Option<FailurePolicy>,
    pub color: Option<ColorChoice>,
}

impl BuildOptions {
    pub fn new(document: DocumentName) -> Self {
        Self { document, config_path: None, on_failure: None, color: None }
    }
}
