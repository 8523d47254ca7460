//! Build configuration loading from the project root.

use std::path::Path;

use tracing::debug;

use crate::domain::config::{self, paths};
use crate::domain::{AppError, BuildConfig, BuildOptions};
use crate::ports::ProjectFilesystem;

/// Load the build configuration for a run.
///
/// An explicit path must exist. Without one, `noetherian.toml` in the
/// project root is used when present and defaults otherwise.
pub fn load_config<F: ProjectFilesystem>(
    filesystem: &F,
    explicit: Option<&Path>,
) -> Result<BuildConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !filesystem.exists(path) {
                return Err(AppError::ConfigMissing(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let path = paths::config(Path::new(""));
            if !filesystem.exists(&path) {
                debug!("no {} found, using defaults", paths::CONFIG_FILE);
                return Ok(BuildConfig::default());
            }
            path
        }
    };

    debug!(path = %path.display(), "loading build configuration");
    let content = filesystem.read_to_string(&path)?;
    config::parse_config_content(&content)
}

/// Apply per-invocation overrides on top of the loaded configuration.
pub fn apply_overrides(mut config: BuildConfig, options: &BuildOptions) -> BuildConfig {
    if let Some(policy) = options.on_failure {
        config.build.on_failure = policy;
    }
    if let Some(color) = options.color {
        config.diagnostics.color = color;
    }
    config
}
