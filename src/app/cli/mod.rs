//! CLI Adapter.

mod logging;

use std::path::PathBuf;

use clap::Parser;

use crate::domain::{
    AppError, BuildOptions, BuildReport, ColorChoice, DocumentName, FailurePolicy,
};

#[derive(Parser)]
#[command(name = "noetherian")]
#[command(version)]
#[command(
    about = "Compile a LaTeX document with its bibliography, keeping build files in metafiles/",
    long_about = None
)]
struct Cli {
    /// Document base name (`paper` builds `paper.tex` with `paper.bib`)
    name: String,
    /// Keep going or stop when a tool reports failure
    #[arg(long, value_parser = ["continue", "halt"])]
    on_failure: Option<String>,
    /// Colorize fatal diagnostics
    #[arg(long, value_parser = ["always", "auto", "never"])]
    color: Option<String>,
    /// Read settings from this file instead of noetherian.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log more (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run_build(cli) {
        Ok(report) => {
            if let Some(summary) = summary(&report) {
                println!("{}", summary);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_build(cli: Cli) -> Result<BuildReport, AppError> {
    let mut options = BuildOptions::new(DocumentName::new(&cli.name)?);
    options.config_path = cli.config;
    options.on_failure = cli.on_failure.as_deref().map(str::parse::<FailurePolicy>).transpose()?;
    options.color = cli.color.as_deref().map(str::parse::<ColorChoice>).transpose()?;

    crate::build(&options)
}

fn summary(report: &BuildReport) -> Option<String> {
    let output = report.output.as_ref()?;

    let failed = report.failed_steps().count();
    if failed == 0 {
        return Some(format!("✅ Built {}", output.display()));
    }

    let mut lines = vec![format!("⚠️  Built {} with {} failed step(s)", output.display(), failed)];
    for outcome in report.failed_steps() {
        lines.push(match outcome.fatal_blocks {
            0 => format!("  - {}", outcome.step),
            1 => format!("  - {} (1 fatal diagnostic)", outcome.step),
            n => format!("  - {} ({} fatal diagnostics)", outcome.step, n),
        });
    }
    Some(lines.join("\n"))
}
