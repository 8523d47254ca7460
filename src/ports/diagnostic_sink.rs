use crate::domain::AppError;

/// Port for the console stream that receives fatal diagnostics.
pub trait DiagnosticSink {
    /// Write already rendered diagnostic text.
    fn emit(&self, text: &str) -> Result<(), AppError>;

    /// Whether the sink is an interactive terminal.
    fn is_terminal(&self) -> bool;
}
