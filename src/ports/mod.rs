mod diagnostic_sink;
mod project_filesystem;
mod tool_runner;

pub use diagnostic_sink::DiagnosticSink;
pub use project_filesystem::ProjectFilesystem;
pub use tool_runner::ToolRunner;
