//! Visual engine configuration: variant selection and per-variant tuning.
//!
//! Defaults reproduce the hero-section constants of the landing page: a
//! 10k-point indigo/blue blob and a 128-segment amber "sun" sphere.

use serde::{Deserialize, Serialize};

/// Which ambient visualization to mount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Variant {
    #[default]
    Blob,
    Sphere,
}

impl Variant {
    /// The other variant (used by the window app to cycle on keypress).
    pub fn toggled(self) -> Self {
        match self {
            Variant::Blob => Variant::Sphere,
            Variant::Sphere => Variant::Blob,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Blob => "blob",
            Variant::Sphere => "sphere",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blob" => Ok(Variant::Blob),
            "sphere" => Ok(Variant::Sphere),
            other => Err(format!("unknown variant '{other}' (expected blob or sphere)")),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis along which a noise layer scrolls over time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DriftAxis {
    #[default]
    X,
    Y,
    Z,
}

/// One noise octave: `noise(p * frequency + axis * time * speed) * amplitude`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseLayerConfig {
    pub frequency: f64,
    pub amplitude: f64,
    pub speed: f64,
    pub drift: DriftAxis,
}

impl Default for NoiseLayerConfig {
    fn default() -> Self {
        Self {
            frequency: 0.6,
            amplitude: 0.2,
            speed: 0.3,
            drift: DriftAxis::X,
        }
    }
}

impl NoiseLayerConfig {
    /// A layer that contributes nothing.
    pub fn silent() -> Self {
        Self {
            amplitude: 0.0,
            ..Default::default()
        }
    }
}

/// Uniform "breathing" term `sin(time * rate) * amplitude`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreatheConfig {
    pub rate: f64,
    pub amplitude: f64,
}

impl Default for BreatheConfig {
    fn default() -> Self {
        Self {
            rate: 0.5,
            amplitude: 0.0,
        }
    }
}

/// Pointer repulsion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub enabled: bool,
    /// Multiplier mapping the normalized pointer into object space.
    pub scale: f64,
    /// Planar distance at which the push fades to zero.
    pub radius: f64,
    /// Maximum push along the normal.
    pub strength: f64,
    /// Per-frame damping toward the raw sample; `None` snaps directly.
    pub smoothing: Option<f64>,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scale: 4.0,
            radius: 1.0,
            strength: 0.5,
            smoothing: Some(0.1),
        }
    }
}

/// How the Z rotation evolves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SpinMode {
    #[default]
    Linear,
    Oscillate,
}

/// Whole-field rotation rates (radians per second).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    pub y_rate: f64,
    pub z_rate: f64,
    pub z_mode: SpinMode,
    /// Peak angle for `z_mode = "oscillate"`.
    pub z_amplitude: f64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            y_rate: 0.2,
            z_rate: 0.05,
            z_mode: SpinMode::Linear,
            z_amplitude: 0.0,
        }
    }
}

/// Perspective camera placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f64,
    pub position: [f64; 3],
    /// Uniform model scale.
    pub scale: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            position: [0.0, 0.0, 8.0],
            scale: 1.0,
        }
    }
}

/// Fresnel rim light.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RimConfig {
    pub color: String,
    pub power: f64,
    pub strength: f64,
}

impl Default for RimConfig {
    fn default() -> Self {
        Self {
            color: "#ffe6b3".into(),
            power: 3.0,
            strength: 0.8,
        }
    }
}

/// Point-cloud "blob" settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobConfig {
    pub count: u32,
    pub radius: f64,
    pub color_a: String,
    pub color_b: String,
    pub size_min: f64,
    pub size_max: f64,
    pub alpha: f64,
    /// Screen-space size factor (pixels at unit view depth).
    pub point_scale: f64,
    pub primary: NoiseLayerConfig,
    pub secondary: NoiseLayerConfig,
    pub breathe: BreatheConfig,
    pub pointer: PointerConfig,
    pub rotation: RotationConfig,
    pub camera: CameraConfig,
    pub rim: RimConfig,
}

impl Default for BlobConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            radius: 2.2,
            color_a: "#4f46e5".into(),
            color_b: "#3b82f6".into(),
            size_min: 0.5,
            size_max: 3.0,
            alpha: 0.8,
            point_scale: 200.0,
            primary: NoiseLayerConfig::default(),
            secondary: NoiseLayerConfig {
                frequency: 1.7,
                amplitude: 0.05,
                speed: 0.2,
                drift: DriftAxis::Y,
            },
            breathe: BreatheConfig::default(),
            pointer: PointerConfig::default(),
            rotation: RotationConfig {
                y_rate: 0.08,
                z_rate: 0.05,
                z_mode: SpinMode::Oscillate,
                z_amplitude: 0.05,
            },
            camera: CameraConfig {
                fov_degrees: 60.0,
                position: [0.0, 1.0, 4.5],
                scale: 1.0,
            },
            rim: RimConfig {
                color: "#ffffff".into(),
                power: 3.0,
                strength: 0.0,
            },
        }
    }
}

/// Tessellated "sun" sphere settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Segments in both latitude and longitude (minimum 128).
    pub segments: u32,
    pub radius: f64,
    pub shadow_color: String,
    pub core_color: String,
    pub highlight_color: String,
    pub alpha: f64,
    pub primary: NoiseLayerConfig,
    pub secondary: NoiseLayerConfig,
    pub breathe: BreatheConfig,
    pub pointer: PointerConfig,
    pub rotation: RotationConfig,
    pub camera: CameraConfig,
    pub rim: RimConfig,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            segments: 128,
            radius: 1.0,
            shadow_color: "#5e8c7d".into(),
            core_color: "#e6b566".into(),
            highlight_color: "#f4dc9f".into(),
            alpha: 1.0,
            primary: NoiseLayerConfig {
                frequency: 2.0,
                amplitude: 0.1,
                speed: 1.0,
                drift: DriftAxis::X,
            },
            secondary: NoiseLayerConfig {
                frequency: 3.0,
                amplitude: 0.1,
                speed: 1.5,
                drift: DriftAxis::Y,
            },
            breathe: BreatheConfig {
                rate: 0.5,
                amplitude: 0.05,
            },
            pointer: PointerConfig {
                enabled: true,
                scale: 1.2,
                radius: 0.6,
                strength: 0.15,
                smoothing: None,
            },
            rotation: RotationConfig::default(),
            camera: CameraConfig {
                fov_degrees: 45.0,
                position: [0.0, 0.0, 8.0],
                scale: 2.4,
            },
            rim: RimConfig::default(),
        }
    }
}

/// Visual engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub variant: Variant,
    /// Seed for per-vertex random attributes and noise permutation.
    pub seed: u64,
    pub blob: BlobConfig,
    pub sphere: SphereConfig,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Blob,
            seed: 0x5eed,
            blob: BlobConfig::default(),
            sphere: SphereConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("Blob".parse::<Variant>().unwrap(), Variant::Blob);
        assert_eq!(" sphere ".parse::<Variant>().unwrap(), Variant::Sphere);
        assert!("cube".parse::<Variant>().is_err());
    }

    #[test]
    fn variant_toggles_between_both() {
        assert_eq!(Variant::Blob.toggled(), Variant::Sphere);
        assert_eq!(Variant::Sphere.toggled(), Variant::Blob);
    }

    #[test]
    fn blob_defaults_match_hero_constants() {
        let blob = BlobConfig::default();
        assert_eq!(blob.count, 10_000);
        assert!((blob.radius - 2.2).abs() < 1e-9);
        assert!((blob.primary.frequency - 0.6).abs() < 1e-9);
        assert_eq!(blob.rotation.z_mode, SpinMode::Oscillate);
        assert!(blob.pointer.smoothing.is_some());
    }

    #[test]
    fn sphere_defaults_snap_pointer() {
        let sphere = SphereConfig::default();
        assert_eq!(sphere.segments, 128);
        assert!(sphere.pointer.smoothing.is_none());
        assert!((sphere.camera.scale - 2.4).abs() < 1e-9);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: VisualConfig = toml::from_str(
            r#"
variant = "sphere"

[blob]
count = 500
"#,
        )
        .unwrap();
        assert_eq!(cfg.variant, Variant::Sphere);
        assert_eq!(cfg.blob.count, 500);
        assert!((cfg.blob.radius - 2.2).abs() < 1e-9);
        assert_eq!(cfg.sphere.segments, 128);
    }
}
