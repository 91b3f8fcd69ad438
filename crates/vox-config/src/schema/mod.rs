//! Configuration schema types for Vox.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the landing-page visuals.

mod render;
mod system;
mod visualizer;
mod window;

pub use render::*;
pub use system::*;
pub use visualizer::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Vox.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct VoxConfig {
    pub visual: VisualConfig,
    pub render: RenderConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
