pub mod adapters;

pub use adapters::local_filesystem::LocalFilesystem;
pub use adapters::process_tool_runner::ProcessToolRunner;
pub use adapters::stdout_sink::StdoutSink;
