//! The compile sequence.
//!
//! One engine pass, the bibliography processor, the remaining engine passes,
//! then the PDF is moved out of the artifacts directory into the project
//! root. Every generated file lands in the artifacts directory; the only
//! thing the root gains is the published PDF.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::config::{apply_overrides, load_config};
use crate::domain::{
    AppError, BuildConfig, BuildOptions, BuildReport, BuildStep, DocumentName, ExitState,
    FailurePolicy, ToolInvocation, extract_fatal_errors, render_blocks,
};
use crate::ports::{DiagnosticSink, ProjectFilesystem, ToolRunner};

/// Execute the build command: load configuration, then run the sequence.
pub fn execute<R, F, S>(
    ctx: &AppContext<R, F, S>,
    options: &BuildOptions,
) -> Result<BuildReport, AppError>
where
    R: ToolRunner,
    F: ProjectFilesystem,
    S: DiagnosticSink,
{
    let loaded = load_config(ctx.filesystem(), options.config_path.as_deref())?;
    let config = apply_overrides(loaded, options);
    run(ctx, &options.document, &config)
}

/// Run the full build sequence for `document` with a resolved configuration.
pub fn run<R, F, S>(
    ctx: &AppContext<R, F, S>,
    document: &DocumentName,
    config: &BuildConfig,
) -> Result<BuildReport, AppError>
where
    R: ToolRunner,
    F: ProjectFilesystem,
    S: DiagnosticSink,
{
    let layout = BuildLayout::new(document, config);
    let mut report = BuildReport::default();

    if !ctx.filesystem().exists(&layout.source) {
        return Err(AppError::MissingInput {
            what: "Source document".to_string(),
            path: layout.source,
        });
    }

    info!(document = %document, policy = config.build.on_failure.label(), "starting build");

    let created = ctx.filesystem().ensure_dir(&layout.artifacts)?;
    info!(dir = %layout.artifacts.display(), created, "artifacts directory ready");
    report.record(BuildStep::EnsureArtifacts, true, 0);

    typeset(ctx, &layout, config, 1, &mut report)?;
    bibliography(ctx, &layout, config, &mut report)?;
    for pass in 2..=1 + config.build.passes_after_bibliography {
        typeset(ctx, &layout, config, pass, &mut report)?;
    }
    publish(ctx, &layout, &mut report)?;

    Ok(report)
}

/// Project-relative paths touched by one build.
struct BuildLayout {
    artifacts: PathBuf,
    source: PathBuf,
    bibliography: PathBuf,
    staged_bibliography: PathBuf,
    aux: String,
    built_pdf: PathBuf,
    published_pdf: PathBuf,
}

impl BuildLayout {
    fn new(document: &DocumentName, config: &BuildConfig) -> Self {
        let artifacts = PathBuf::from(&config.build.artifacts_dir);
        Self {
            source: PathBuf::from(document.source()),
            bibliography: PathBuf::from(document.bibliography()),
            staged_bibliography: artifacts.join(document.bibliography()),
            aux: document.aux(),
            built_pdf: artifacts.join(document.pdf()),
            published_pdf: PathBuf::from(document.pdf()),
            artifacts,
        }
    }
}

fn typeset<R, F, S>(
    ctx: &AppContext<R, F, S>,
    layout: &BuildLayout,
    config: &BuildConfig,
    pass: usize,
    report: &mut BuildReport,
) -> Result<(), AppError>
where
    R: ToolRunner,
    F: ProjectFilesystem,
    S: DiagnosticSink,
{
    let step = BuildStep::Typeset { pass };

    let mut args = config.engine.args.clone();
    args.push(format!("-output-directory={}", layout.artifacts.display()));
    args.push(layout.source.display().to_string());
    let invocation = ToolInvocation {
        program: config.engine.program.clone(),
        args,
        working_dir: ctx.filesystem().root().to_path_buf(),
        capture_stdout: true,
    };

    info!(%step, command = %invocation.command_line(), "typesetting");
    let output = ctx.tools().run(&invocation)?;

    let blocks = extract_fatal_errors(&output.stdout, config.diagnostics.context_lines);
    if !blocks.is_empty() {
        let color = config.diagnostics.color.enabled(ctx.console().is_terminal());
        ctx.console().emit(&render_blocks(&blocks, color))?;
    }

    let fatal_blocks = blocks.len();
    let success = output.status.success() && fatal_blocks == 0;
    settle(report, step, success, fatal_blocks, config.build.on_failure, || {
        failure_details(output.status, fatal_blocks)
    })
}

fn bibliography<R, F, S>(
    ctx: &AppContext<R, F, S>,
    layout: &BuildLayout,
    config: &BuildConfig,
    report: &mut BuildReport,
) -> Result<(), AppError>
where
    R: ToolRunner,
    F: ProjectFilesystem,
    S: DiagnosticSink,
{
    let filesystem = ctx.filesystem();
    if !filesystem.exists(&layout.bibliography) {
        return Err(AppError::MissingInput {
            what: "Bibliography database".to_string(),
            path: layout.bibliography.clone(),
        });
    }

    // The processor looks for the database next to the .aux it reads.
    let staged =
        StagedBibliography::stage(filesystem, &layout.bibliography, &layout.staged_bibliography)?;
    report.record(BuildStep::StageBibliography, true, 0);

    let mut args = config.bibliography.args.clone();
    args.push(layout.aux.clone());
    let invocation = ToolInvocation {
        program: config.bibliography.program.clone(),
        args,
        working_dir: filesystem.root().join(&layout.artifacts),
        capture_stdout: false,
    };

    info!(step = %BuildStep::Bibliography, command = %invocation.command_line(), "processing bibliography");
    let output = ctx.tools().run(&invocation)?;
    staged.remove()?;

    let success = output.status.exited_with_any(&config.bibliography.tolerated_exit_codes);
    if success && !output.status.success() {
        info!(status = %output.status, "bibliography processor reported warnings");
    }
    settle(report, BuildStep::Bibliography, success, 0, config.build.on_failure, || {
        output.status.to_string()
    })
}

fn publish<R, F, S>(
    ctx: &AppContext<R, F, S>,
    layout: &BuildLayout,
    report: &mut BuildReport,
) -> Result<(), AppError>
where
    R: ToolRunner,
    F: ProjectFilesystem,
    S: DiagnosticSink,
{
    let filesystem = ctx.filesystem();
    if !filesystem.exists(&layout.built_pdf) {
        return Err(AppError::OutputMissing(filesystem.root().join(&layout.built_pdf)));
    }

    filesystem.replace(&layout.built_pdf, &layout.published_pdf)?;
    let digest = sha256_hex(&filesystem.read_bytes(&layout.published_pdf)?);

    info!(output = %layout.published_pdf.display(), sha256 = %digest, "published");
    report.record(BuildStep::Publish, true, 0);
    report.output = Some(filesystem.root().join(&layout.published_pdf));
    report.output_digest = Some(digest);
    Ok(())
}

/// Record a step and decide whether the build goes on.
fn settle(
    report: &mut BuildReport,
    step: BuildStep,
    success: bool,
    fatal_blocks: usize,
    policy: FailurePolicy,
    details: impl FnOnce() -> String,
) -> Result<(), AppError> {
    report.record(step, success, fatal_blocks);
    if success {
        return Ok(());
    }

    match policy {
        FailurePolicy::Halt => Err(AppError::StepFailed { step, details: details() }),
        FailurePolicy::Continue => {
            warn!(%step, details = %details(), "step failed, continuing");
            Ok(())
        }
    }
}

fn failure_details(status: ExitState, fatal_blocks: usize) -> String {
    match fatal_blocks {
        0 => status.to_string(),
        1 => format!("{}, 1 fatal diagnostic", status),
        n => format!("{}, {} fatal diagnostics", status, n),
    }
}

fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Copy of the bibliography database inside the artifacts directory.
///
/// Removed explicitly after the bibliography pass, or on drop if the pass
/// bailed out early.
struct StagedBibliography<'a, F: ProjectFilesystem> {
    filesystem: &'a F,
    path: PathBuf,
    removed: bool,
}

impl<'a, F: ProjectFilesystem> StagedBibliography<'a, F> {
    fn stage(filesystem: &'a F, from: &Path, to: &Path) -> Result<Self, AppError> {
        filesystem.copy_preserving(from, to)?;
        Ok(Self { filesystem, path: to.to_path_buf(), removed: false })
    }

    fn remove(mut self) -> Result<(), AppError> {
        self.removed = true;
        self.filesystem.remove_file(&self.path)
    }
}

impl<F: ProjectFilesystem> Drop for StagedBibliography<'_, F> {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = self.filesystem.remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove staged bibliography");
        }
    }
}
