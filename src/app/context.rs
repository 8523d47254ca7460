use crate::ports::{DiagnosticSink, ProjectFilesystem, ToolRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: ToolRunner, F: ProjectFilesystem, S: DiagnosticSink> {
    tools: R,
    filesystem: F,
    console: S,
}

impl<R: ToolRunner, F: ProjectFilesystem, S: DiagnosticSink> AppContext<R, F, S> {
    /// Create a new application context.
    pub fn new(tools: R, filesystem: F, console: S) -> Self {
        Self { tools, filesystem, console }
    }

    /// Get a reference to the external tool runner.
    pub fn tools(&self) -> &R {
        &self.tools
    }

    /// Get a reference to the project filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the diagnostic console.
    pub fn console(&self) -> &S {
        &self.console
    }
}
