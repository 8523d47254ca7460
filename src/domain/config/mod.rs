pub mod build_config;
pub mod build_options;
pub mod parse;
pub mod paths;

pub use build_config::{
    BibliographyConfig, BuildConfig, BuildSettings, DiagnosticsConfig, EngineConfig,
};
pub use build_options::BuildOptions;
pub use parse::parse_config_content;
