pub mod config;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod policy;
pub mod report;
pub mod tool;

pub use config::{BuildConfig, BuildOptions};
pub use diagnostics::{DiagnosticBlock, LineKind, extract_fatal_errors, render_blocks};
pub use document::DocumentName;
pub use error::AppError;
pub use policy::{ColorChoice, FailurePolicy};
pub use report::{BuildReport, BuildStep, StepOutcome};
pub use tool::{ExitState, ToolInvocation, ToolOutput};
