mod load_config;

pub use load_config::{apply_overrides, load_config};
