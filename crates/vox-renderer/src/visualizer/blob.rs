//! Blob variant: a drifting point cloud with soft sprites.

use vox_config::colors::parse_rgb_or;
use vox_config::schema::{Variant, VoxConfig};

use crate::displacement::{DisplacementParams, Shading};
use crate::geometry::GeometrySpec;
use crate::surface::SurfaceSettings;

use super::types::{
    camera_spec, noise_layer, noise_seed, pointer_push, rim_light, rotation_law, VariantProfile,
};

pub(super) fn blob_profile(config: &VoxConfig, surface: SurfaceSettings) -> VariantProfile {
    let blob = &config.visual.blob;
    let seed = config.visual.seed;

    let (min, max) = (blob.size_min as f32, blob.size_max as f32);
    VariantProfile {
        variant: Variant::Blob,
        geometry: GeometrySpec::PointCloud {
            count: blob.count,
            radius: blob.radius as f32,
            palette: [
                parse_rgb_or(&blob.color_a, [0.31, 0.27, 0.9]),
                parse_rgb_or(&blob.color_b, [0.23, 0.51, 0.96]),
            ],
            size_range: (min.min(max), max.max(min)),
        },
        displacement: DisplacementParams {
            primary: noise_layer(&blob.primary),
            secondary: noise_layer(&blob.secondary),
            breathe_rate: blob.breathe.rate as f32,
            breathe_amplitude: blob.breathe.amplitude as f32,
            pointer: pointer_push(&blob.pointer),
            shading: Shading::VertexColor,
            rim: rim_light(&blob.rim),
            alpha: blob.alpha as f32,
            noise_seed: noise_seed(seed),
        },
        surface: SurfaceSettings {
            camera: camera_spec(&blob.camera),
            point_scale: blob.point_scale as f32,
            ..surface
        },
        rotation: rotation_law(&blob.rotation),
        pointer_smoothing: blob.pointer.smoothing.map(|k| k as f32),
        seed,
    }
}
