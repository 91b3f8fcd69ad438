//! Variant profile: everything needed to mount one visualization.

use vox_config::schema::{
    CameraConfig, DriftAxis, NoiseLayerConfig, PointerConfig, RimConfig, RotationConfig,
    SpinMode, Variant,
};
use vox_config::colors::parse_rgb_or;

use crate::animation::{RotationLaw, ZSpin};
use crate::camera::CameraSpec;
use crate::displacement::{DisplacementParams, NoiseLayer, PointerPush, RimLight};
use crate::geometry::GeometrySpec;
use crate::surface::SurfaceSettings;

/// Fully resolved settings for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantProfile {
    pub variant: Variant,
    pub geometry: GeometrySpec,
    pub displacement: DisplacementParams,
    pub surface: SurfaceSettings,
    pub rotation: RotationLaw,
    /// Pointer lerp factor per frame; `None` snaps.
    pub pointer_smoothing: Option<f32>,
    /// Seed for per-vertex attributes.
    pub seed: u64,
}

pub(super) fn drift_vector(axis: DriftAxis) -> [f32; 3] {
    match axis {
        DriftAxis::X => [1.0, 0.0, 0.0],
        DriftAxis::Y => [0.0, 1.0, 0.0],
        DriftAxis::Z => [0.0, 0.0, 1.0],
    }
}

pub(super) fn noise_layer(cfg: &NoiseLayerConfig) -> NoiseLayer {
    NoiseLayer {
        frequency: cfg.frequency as f32,
        amplitude: cfg.amplitude as f32,
        speed: cfg.speed as f32,
        drift: drift_vector(cfg.drift),
    }
}

pub(super) fn pointer_push(cfg: &PointerConfig) -> Option<PointerPush> {
    cfg.enabled.then(|| PointerPush {
        scale: cfg.scale as f32,
        radius: cfg.radius as f32,
        strength: cfg.strength as f32,
    })
}

pub(super) fn rotation_law(cfg: &RotationConfig) -> RotationLaw {
    RotationLaw {
        y_rate: cfg.y_rate as f32,
        z_rate: cfg.z_rate as f32,
        z_spin: match cfg.z_mode {
            SpinMode::Linear => ZSpin::Linear,
            SpinMode::Oscillate => ZSpin::Oscillate {
                amplitude: cfg.z_amplitude as f32,
            },
        },
    }
}

pub(super) fn camera_spec(cfg: &CameraConfig) -> CameraSpec {
    CameraSpec {
        fov_y: (cfg.fov_degrees as f32).to_radians(),
        position: cfg.position.map(|c| c as f32),
        model_scale: cfg.scale as f32,
    }
}

pub(super) fn rim_light(cfg: &RimConfig) -> RimLight {
    RimLight {
        color: parse_rgb_or(&cfg.color, [1.0, 1.0, 1.0]),
        power: cfg.power as f32,
        strength: cfg.strength as f32,
    }
}

/// Fold a 64-bit seed into the 32-bit noise seed.
pub(super) fn noise_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}
