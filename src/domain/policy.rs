use std::str::FromStr;

use serde::Deserialize;

use crate::domain::AppError;

/// What to do when a tool reports failure partway through a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record the failure and run the remaining steps anyway.
    #[default]
    Continue,
    /// Stop at the first failing step.
    Halt,
}

impl FailurePolicy {
    pub fn label(self) -> &'static str {
        match self {
            FailurePolicy::Continue => "continue",
            FailurePolicy::Halt => "halt",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "continue" => Ok(FailurePolicy::Continue),
            "halt" => Ok(FailurePolicy::Halt),
            _ => Err(AppError::config_error(format!(
                "Invalid failure policy '{}'. Expected 'continue' or 'halt'.",
                s
            ))),
        }
    }
}

/// When diagnostic output is colorized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Always,
    Auto,
    Never,
}

impl ColorChoice {
    /// Resolve the choice against whether the destination is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Auto => is_terminal,
            ColorChoice::Never => false,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ColorChoice::Always),
            "auto" => Ok(ColorChoice::Auto),
            "never" => Ok(ColorChoice::Never),
            _ => Err(AppError::config_error(format!(
                "Invalid color choice '{}'. Expected 'always', 'auto' or 'never'.",
                s
            ))),
        }
    }
}
