//! Build configuration domain models.

use std::path::{Component, Path};

use serde::Deserialize;

use crate::domain::diagnostics::DEFAULT_CONTEXT_LINES;
use crate::domain::{AppError, ColorChoice, FailurePolicy};

/// Configuration for a build loaded from `noetherian.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Build sequence settings.
    #[serde(default)]
    pub build: BuildSettings,
    /// Typesetting engine invocation.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Bibliography processor invocation.
    #[serde(default)]
    pub bibliography: BibliographyConfig,
    /// Fatal diagnostic display.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.build.validate()?;
        self.engine.validate()?;
        self.bibliography.validate()?;
        Ok(())
    }
}

/// Build sequence settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Directory, relative to the project root, receiving generated files.
    #[serde(default = "default_artifacts_dir")]
    pub artifacts_dir: String,
    /// Typesetting passes run after the bibliography step.
    #[serde(default = "default_passes_after_bibliography")]
    pub passes_after_bibliography: usize,
    /// Whether tool failures stop the build.
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            artifacts_dir: default_artifacts_dir(),
            passes_after_bibliography: default_passes_after_bibliography(),
            on_failure: FailurePolicy::default(),
        }
    }
}

impl BuildSettings {
    fn validate(&self) -> Result<(), AppError> {
        let path = Path::new(&self.artifacts_dir);
        let mut components = path.components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_normal {
            return Err(AppError::config_error(format!(
                "build.artifacts_dir must be a single directory name inside the project, got '{}'",
                self.artifacts_dir
            )));
        }
        if self.passes_after_bibliography == 0 {
            return Err(AppError::config_error(
                "build.passes_after_bibliography must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_artifacts_dir() -> String {
    "metafiles".to_string()
}

fn default_passes_after_bibliography() -> usize {
    2
}

/// Typesetting engine invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default = "default_engine_program")]
    pub program: String,
    /// Flags passed before `-output-directory` and the source file.
    #[serde(default = "default_engine_args")]
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { program: default_engine_program(), args: default_engine_args() }
    }
}

impl EngineConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("engine.program cannot be empty"));
        }
        Ok(())
    }
}

fn default_engine_program() -> String {
    "pdflatex".to_string()
}

fn default_engine_args() -> Vec<String> {
    vec!["-halt-on-error".to_string()]
}

/// Bibliography processor invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BibliographyConfig {
    #[serde(default = "default_bibliography_program")]
    pub program: String,
    /// Flags passed before the auxiliary file.
    #[serde(default = "default_bibliography_args")]
    pub args: Vec<String>,
    /// Exit codes that still count as success. bibtex exits 1 when it only
    /// warned, and the `.bbl` is written all the same.
    #[serde(default = "default_tolerated_exit_codes")]
    pub tolerated_exit_codes: Vec<i32>,
}

impl Default for BibliographyConfig {
    fn default() -> Self {
        Self {
            program: default_bibliography_program(),
            args: default_bibliography_args(),
            tolerated_exit_codes: default_tolerated_exit_codes(),
        }
    }
}

impl BibliographyConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("bibliography.program cannot be empty"));
        }
        if self.tolerated_exit_codes.is_empty() {
            return Err(AppError::config_error(
                "bibliography.tolerated_exit_codes must list at least one code",
            ));
        }
        Ok(())
    }
}

fn default_bibliography_program() -> String {
    "bibtex".to_string()
}

fn default_bibliography_args() -> Vec<String> {
    vec!["-terse".to_string()]
}

fn default_tolerated_exit_codes() -> Vec<i32> {
    vec![0, 1]
}

/// Fatal diagnostic display.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Lines of context shown after each fatal line.
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,
    #[serde(default)]
    pub color: ColorChoice,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { context_lines: default_context_lines(), color: ColorChoice::default() }
    }
}

fn default_context_lines() -> usize {
    DEFAULT_CONTEXT_LINES
}
