//! Build steps and the record of a finished run.

use std::fmt;
use std::path::PathBuf;

/// One step of the fixed build sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    EnsureArtifacts,
    Typeset { pass: usize },
    StageBibliography,
    Bibliography,
    Publish,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStep::EnsureArtifacts => f.write_str("artifacts directory"),
            BuildStep::Typeset { pass } => write!(f, "typesetting pass {}", pass),
            BuildStep::StageBibliography => f.write_str("bibliography staging"),
            BuildStep::Bibliography => f.write_str("bibliography pass"),
            BuildStep::Publish => f.write_str("publish"),
        }
    }
}

/// Result of a single executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: BuildStep,
    pub success: bool,
    /// Number of fatal diagnostic blocks found in the step's output.
    pub fatal_blocks: usize,
}

/// Everything a finished build run reports back.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub steps: Vec<StepOutcome>,
    /// Published output document, when the run got that far.
    pub output: Option<PathBuf>,
    /// Hex SHA-256 of the published output document.
    pub output_digest: Option<String>,
}

impl BuildReport {
    pub fn record(&mut self, step: BuildStep, success: bool, fatal_blocks: usize) {
        self.steps.push(StepOutcome { step, success, fatal_blocks });
    }

    /// Steps whose tool reported failure but the run went on.
    pub fn failed_steps(&self) -> impl Iterator<Item = &StepOutcome> {
        self.steps.iter().filter(|outcome| !outcome.success)
    }

    pub fn is_clean(&self) -> bool {
        self.failed_steps().next().is_none()
    }

    pub fn typeset_passes(&self) -> usize {
        self.steps.iter().filter(|outcome| matches!(outcome.step, BuildStep::Typeset { .. })).count()
    }
}
