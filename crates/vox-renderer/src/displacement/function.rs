//! The per-vertex displacement law.

use noise::{NoiseFn, OpenSimplex};

use crate::animation::FrameState;
use crate::geometry::{FieldVertex, GeometryField, VertexInput};

use super::shading::{clamp01, rim, shade};
use super::types::{Displaced, DisplacementParams, NoiseLayer};

/// Sine/cosine of the frame's model rotation, shared by every vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationBasis {
    cos_y: f32,
    sin_y: f32,
    cos_z: f32,
    sin_z: f32,
}

impl RotationBasis {
    pub fn new(rotation_y: f32, rotation_z: f32) -> Self {
        Self {
            cos_y: rotation_y.cos(),
            sin_y: rotation_y.sin(),
            cos_z: rotation_z.cos(),
            sin_z: rotation_z.sin(),
        }
    }

    /// Apply `rotate_y · rotate_z` to a direction.
    pub fn rotate(&self, n: [f32; 3]) -> [f32; 3] {
        let x = self.cos_z * n[0] - self.sin_z * n[1];
        let y = self.sin_z * n[0] + self.cos_z * n[1];
        let z = n[2];
        [
            self.cos_y * x + self.sin_y * z,
            y,
            -self.sin_y * x + self.cos_y * z,
        ]
    }
}

/// Evaluates one variant's displacement law.
///
/// Holds the two noise fields; otherwise stateless, so the same input always
/// produces the same output.
pub struct Displacer {
    params: DisplacementParams,
    primary: OpenSimplex,
    secondary: OpenSimplex,
}

impl Displacer {
    pub fn new(params: DisplacementParams) -> Self {
        Self {
            primary: OpenSimplex::new(params.noise_seed),
            secondary: OpenSimplex::new(params.noise_seed.wrapping_add(1)),
            params,
        }
    }

    pub fn params(&self) -> &DisplacementParams {
        &self.params
    }

    /// Displace one vertex for `frame`.
    pub fn displace(&self, vertex: &VertexInput, frame: &FrameState) -> Displaced {
        let basis = RotationBasis::new(frame.rotation_y, frame.rotation_z);
        self.displace_with(vertex, frame, &basis)
    }

    /// Same as [`displace`](Self::displace) with a precomputed rotation basis.
    pub fn displace_with(
        &self,
        vertex: &VertexInput,
        frame: &FrameState,
        basis: &RotationBasis,
    ) -> Displaced {
        let p = &self.params;
        let t = frame.time;
        let [nx, ny, nz] = vertex.normal;

        let elevation = sample_layer(&self.primary, &p.primary, vertex.position, t)
            + sample_layer(&self.secondary, &p.secondary, vertex.position, t)
            + (t * p.breathe_rate).sin() * p.breathe_amplitude;

        let mut position = [
            vertex.position[0] + nx * elevation,
            vertex.position[1] + ny * elevation,
            vertex.position[2] + nz * elevation,
        ];

        if let Some(push) = p.pointer {
            let dx = position[0] - frame.pointer[0] * push.scale;
            let dy = position[1] - frame.pointer[1] * push.scale;
            let dist = (dx * dx + dy * dy).sqrt();
            let force = if push.radius > 0.0 {
                (1.0 - dist / push.radius).max(0.0)
            } else {
                0.0
            };
            let offset = force * push.strength * vertex.random_phase;
            position[0] += nx * offset;
            position[1] += ny * offset;
            position[2] += nz * offset;
        }

        let base = shade(&p.shading, vertex.color, elevation);
        let glow = rim(&p.rim, basis.rotate(vertex.normal));
        let color = clamp01([base[0] + glow[0], base[1] + glow[1], base[2] + glow[2]]);

        Displaced {
            position,
            color,
            alpha: p.alpha,
            elevation,
        }
    }

    /// Displace every vertex of `field` into `out`, reusing its allocation.
    pub fn displace_field(
        &self,
        field: &GeometryField,
        frame: &FrameState,
        out: &mut Vec<FieldVertex>,
    ) {
        let basis = RotationBasis::new(frame.rotation_y, frame.rotation_z);
        out.clear();
        out.extend(field.vertices().map(|v| {
            let d = self.displace_with(&v, frame, &basis);
            FieldVertex {
                position: d.position,
                size: v.size,
                color: d.color,
                alpha: d.alpha,
            }
        }));
    }
}

/// `noise(p·frequency + drift·t·speed)·amplitude`, noise clamped to `[-1, 1]`.
fn sample_layer(noise: &OpenSimplex, layer: &NoiseLayer, p: [f32; 3], t: f32) -> f32 {
    if layer.amplitude == 0.0 {
        return 0.0;
    }
    let shift = t * layer.speed;
    let point = [
        (p[0] * layer.frequency + layer.drift[0] * shift) as f64,
        (p[1] * layer.frequency + layer.drift[1] * shift) as f64,
        (p[2] * layer.frequency + layer.drift[2] * shift) as f64,
    ];
    (noise.get(point) as f32).clamp(-1.0, 1.0) * layer.amplitude
}
