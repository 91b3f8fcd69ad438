//! Vox configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use defaults matching the landing-page visuals, so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vox_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{Variant, VoxConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use vox_common::ConfigError;

/// Load config from `path`, or from the platform default location.
///
/// The default location is created with a commented template when missing.
/// An explicit path that does not exist is an error. The loaded config is
/// validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<VoxConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &VoxConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
