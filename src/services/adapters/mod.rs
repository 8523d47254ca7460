pub mod local_filesystem;
pub mod process_tool_runner;
pub mod stdout_sink;
