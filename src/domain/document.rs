//! Document base name and the file names derived from it.

use std::fmt;

use crate::domain::AppError;

const SOURCE_EXTENSION: &str = ".tex";

/// Validated base name of the primary document (`paper` for `paper.tex`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentName(String);

impl DocumentName {
    /// Parse a document name from the command line.
    ///
    /// A trailing `.tex` is accepted and stripped. Names that would escape the
    /// project root, or that a tool would read as an option, are rejected.
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let name = raw.strip_suffix(SOURCE_EXTENSION).unwrap_or(raw);

        if name.is_empty()
            || name == "."
            || name == ".."
            || name.starts_with('-')
            || name.contains('/')
            || name.contains('\\')
            || name.chars().any(char::is_control)
        {
            return Err(AppError::InvalidDocumentName(raw.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// `<name>.tex`
    pub fn source(&self) -> String {
        self.with_extension("tex")
    }

    /// `<name>.bib`
    pub fn bibliography(&self) -> String {
        self.with_extension("bib")
    }

    /// `<name>.aux`
    pub fn aux(&self) -> String {
        self.with_extension("aux")
    }

    /// `<name>.pdf`
    pub fn pdf(&self) -> String {
        self.with_extension("pdf")
    }

    fn with_extension(&self, extension: &str) -> String {
        format!("{}.{}", self.0, extension)
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
