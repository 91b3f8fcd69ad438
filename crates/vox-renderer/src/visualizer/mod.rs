//! Visualizer variants: blob point cloud or displaced sphere.
//!
//! The active variant is selected by config. Each variant resolves to a
//! [`VariantProfile`] the lifecycle binder mounts.

mod blob;
mod sphere;
mod types;

pub use types::VariantProfile;

use vox_config::colors::parse_rgb_or;
use vox_config::schema::{Variant, VoxConfig};

use crate::surface::SurfaceSettings;

impl VariantProfile {
    /// Resolve `variant` against the config.
    pub fn from_config(config: &VoxConfig, variant: Variant) -> Self {
        let [r, g, b] = parse_rgb_or(&config.render.clear_color, [1.0, 1.0, 1.0]);
        let surface = SurfaceSettings {
            max_pixel_ratio: config.render.max_pixel_ratio as f32,
            clear_color: [r, g, b, config.render.clear_alpha as f32],
            vsync: config.render.vsync,
            ..SurfaceSettings::default()
        };
        match variant {
            Variant::Blob => blob::blob_profile(config, surface),
            Variant::Sphere => sphere::sphere_profile(config, surface),
        }
    }
}

/// Profile for the variant selected in config.
pub fn create_profile(config: &VoxConfig) -> VariantProfile {
    VariantProfile::from_config(config, config.visual.variant)
}
