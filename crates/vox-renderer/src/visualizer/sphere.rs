//! Sphere variant: a tessellated "sun" shaded by elevation with a rim glow.

use vox_config::colors::parse_rgb_or;
use vox_config::schema::{Variant, VoxConfig};

use crate::displacement::{DisplacementParams, Shading};
use crate::geometry::GeometrySpec;
use crate::surface::SurfaceSettings;

use super::types::{
    camera_spec, noise_layer, noise_seed, pointer_push, rim_light, rotation_law, VariantProfile,
};

pub(super) fn sphere_profile(config: &VoxConfig, surface: SurfaceSettings) -> VariantProfile {
    let sphere = &config.visual.sphere;
    let seed = config.visual.seed;

    VariantProfile {
        variant: Variant::Sphere,
        geometry: GeometrySpec::UvSphere {
            segments: sphere.segments,
            radius: sphere.radius as f32,
        },
        displacement: DisplacementParams {
            primary: noise_layer(&sphere.primary),
            secondary: noise_layer(&sphere.secondary),
            breathe_rate: sphere.breathe.rate as f32,
            breathe_amplitude: sphere.breathe.amplitude as f32,
            pointer: pointer_push(&sphere.pointer),
            shading: Shading::Elevation {
                shadow: parse_rgb_or(&sphere.shadow_color, [0.37, 0.55, 0.49]),
                core: parse_rgb_or(&sphere.core_color, [0.9, 0.71, 0.4]),
                highlight: parse_rgb_or(&sphere.highlight_color, [0.96, 0.86, 0.62]),
            },
            rim: rim_light(&sphere.rim),
            alpha: sphere.alpha as f32,
            noise_seed: noise_seed(seed),
        },
        surface: SurfaceSettings {
            camera: camera_spec(&sphere.camera),
            ..surface
        },
        rotation: rotation_law(&sphere.rotation),
        pointer_smoothing: sphere.pointer.smoothing.map(|k| k as f32),
        seed,
    }
}
