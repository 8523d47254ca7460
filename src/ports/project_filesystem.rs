use std::path::Path;

use crate::domain::AppError;

/// Port for filesystem access within the project root.
///
/// Relative paths are resolved against `root()`.
pub trait ProjectFilesystem {
    /// Absolute project root.
    fn root(&self) -> &Path;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory if absent. Returns `true` when it was created.
    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError>;

    /// Copy a file, keeping its permissions and modification time.
    fn copy_preserving(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// Move `from` onto `to`, replacing any existing file at `to`.
    fn replace(&self, from: &Path, to: &Path) -> Result<(), AppError>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Read a file as raw bytes.
    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError>;
}
