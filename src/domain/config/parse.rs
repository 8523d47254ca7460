//! Pure parse/validate for build configuration (`noetherian.toml`).

use crate::domain::{AppError, BuildConfig};

/// Parse and validate build configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<BuildConfig, AppError> {
    let config: BuildConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
