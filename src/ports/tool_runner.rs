use crate::domain::{AppError, ToolInvocation, ToolOutput};

/// Port for running external tools to completion.
pub trait ToolRunner {
    /// Run the tool and wait for it to exit.
    ///
    /// A non-zero exit is reported through `ToolOutput::status`, not as an
    /// error. Errors mean the tool could not be run at all.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError>;
}
