use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "noetherian.toml";

/// `noetherian.toml` in the project root.
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
