use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::{AppError, ExitState, ToolInvocation, ToolOutput};
use crate::ports::ToolRunner;

/// Runs external tools as child processes.
///
/// Stderr always goes to the console. Stdin is closed so an engine that
/// wants interactive input stops instead of waiting forever.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit());

        debug!(
            command = %invocation.command_line(),
            cwd = %invocation.working_dir.display(),
            "spawning tool"
        );

        let spawn_error = |e: std::io::Error| AppError::ToolSpawn {
            program: invocation.program.clone(),
            details: e.to_string(),
        };

        let output = if invocation.capture_stdout {
            let output = command.stdout(Stdio::piped()).output().map_err(spawn_error)?;
            ToolOutput {
                status: ExitState { code: output.status.code() },
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            }
        } else {
            let status = command.stdout(Stdio::inherit()).status().map_err(spawn_error)?;
            ToolOutput { status: ExitState { code: status.code() }, stdout: String::new() }
        };

        debug!(program = %invocation.program, status = %output.status, "tool finished");
        Ok(output)
    }
}
