//! External tool invocation models.

use std::fmt;
use std::path::PathBuf;

/// A fully resolved external tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory of the child process.
    pub working_dir: PathBuf,
    /// Capture stdout for inspection instead of passing it to the console.
    pub capture_stdout: bool,
}

impl ToolInvocation {
    /// Render the call as a shell-like command line for logs and errors.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a finished child process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitState {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl ExitState {
    pub fn success(self) -> bool {
        self.code == Some(0)
    }

    /// Whether the process exited normally with one of `codes`.
    pub fn exited_with_any(self, codes: &[i32]) -> bool {
        self.code.is_some_and(|code| codes.contains(&code))
    }
}

impl fmt::Display for ExitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Result of running an external tool to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub status: ExitState,
    /// Captured stdout; empty when the invocation did not capture it.
    pub stdout: String,
}
