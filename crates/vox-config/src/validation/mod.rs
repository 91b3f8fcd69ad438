//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod render;
mod visualizer;


use crate::schema::VoxConfig;
use vox_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VoxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    visualizer::validate_blob(&mut errors, config);
    visualizer::validate_sphere(&mut errors, config);
    render::validate_render(&mut errors, config);
    render::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
