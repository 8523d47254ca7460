use std::io::{self, IsTerminal, Write};

use crate::domain::AppError;
use crate::ports::DiagnosticSink;

/// Writes diagnostics to the process stdout.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for StdoutSink {
    fn emit(&self, text: &str) -> Result<(), AppError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }
}
