use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

/// Filesystem access rooted at the project directory.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    /// Create a filesystem rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a filesystem rooted at the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl ProjectFilesystem for LocalFilesystem {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn ensure_dir(&self, path: &Path) -> Result<bool, AppError> {
        let dir = self.resolve(path);
        if dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir(&dir)?;
        Ok(true)
    }

    fn copy_preserving(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        let from = self.resolve(from);
        let to = self.resolve(to);

        let metadata = fs::metadata(&from)?;
        let mut reader = fs::File::open(&from)?;
        let mut writer = fs::File::create(&to)?;
        io::copy(&mut reader, &mut writer)?;
        writer.set_modified(metadata.modified()?)?;
        // Permissions last, the source may be read-only.
        fs::set_permissions(&to, metadata.permissions())?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        fs::remove_file(self.resolve(path))?;
        Ok(())
    }

    fn replace(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        fs::rename(self.resolve(from), self.resolve(to))?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, AppError> {
        Ok(fs::read(self.resolve(path))?)
    }
}
