//! noetherian: compile a LaTeX document with its bibliography in one step.
//!
//! The engine runs once, the bibliography processor fills in citations, and
//! two more engine passes settle cross-references. Intermediate files stay in
//! `metafiles/`; only the finished PDF is moved into the project root.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;


use app::AppContext;
use services::{LocalFilesystem, ProcessToolRunner, StdoutSink};

pub use domain::{
    AppError, BuildConfig, BuildOptions, BuildReport, BuildStep, ColorChoice, DocumentName,
    FailurePolicy,
};

/// Build a document in the current directory.
///
/// Runs the engine, the bibliography processor and the remaining engine
/// passes with real child processes, printing fatal diagnostics to stdout.
pub fn build(options: &BuildOptions) -> Result<BuildReport, AppError> {
    let filesystem = LocalFilesystem::current()?;
    let ctx = AppContext::new(ProcessToolRunner::new(), filesystem, StdoutSink::new());
    app::commands::build::execute(&ctx, options)
}
