//! Parameters and outputs of the displacement function.

/// One noise octave: `noise(p·frequency + drift·t·speed)·amplitude`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseLayer {
    pub frequency: f32,
    pub amplitude: f32,
    pub speed: f32,
    /// Unit axis the sample point scrolls along over time.
    pub drift: [f32; 3],
}

impl NoiseLayer {
    pub const SILENT: NoiseLayer = NoiseLayer {
        frequency: 0.0,
        amplitude: 0.0,
        speed: 0.0,
        drift: [0.0; 3],
    };
}

/// Radial push away from the pointer, measured in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPush {
    /// Multiplier mapping the normalized pointer into object space.
    pub scale: f32,
    /// Planar distance at which the push fades to zero.
    pub radius: f32,
    pub strength: f32,
}

/// How vertex colors are derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Keep the per-vertex attribute color.
    VertexColor,
    /// Blend a three-stop palette by elevation.
    Elevation {
        shadow: [f32; 3],
        core: [f32; 3],
        highlight: [f32; 3],
    },
}

/// Fresnel rim light added on silhouettes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimLight {
    pub color: [f32; 3],
    pub power: f32,
    pub strength: f32,
}

impl RimLight {
    pub const OFF: RimLight = RimLight {
        color: [0.0; 3],
        power: 1.0,
        strength: 0.0,
    };
}

/// Everything that parameterizes one variant's displacement law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacementParams {
    pub primary: NoiseLayer,
    pub secondary: NoiseLayer,
    /// Uniform `sin(t·rate)·amplitude` term.
    pub breathe_rate: f32,
    pub breathe_amplitude: f32,
    pub pointer: Option<PointerPush>,
    pub shading: Shading,
    pub rim: RimLight,
    /// Base alpha for every vertex.
    pub alpha: f32,
    /// Seed of the primary noise; the secondary uses the next seed.
    pub noise_seed: u32,
}

impl Default for DisplacementParams {
    fn default() -> Self {
        Self {
            primary: NoiseLayer::SILENT,
            secondary: NoiseLayer::SILENT,
            breathe_rate: 0.0,
            breathe_amplitude: 0.0,
            pointer: None,
            shading: Shading::VertexColor,
            rim: RimLight::OFF,
            alpha: 1.0,
            noise_seed: 0,
        }
    }
}

/// Result of displacing one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displaced {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub alpha: f32,
    /// Signed offset along the normal, before any pointer push.
    pub elevation: f32,
}
