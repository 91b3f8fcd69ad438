//! Tessellated UV sphere.
//!
//! Vertices form a `(segments + 1) × (segments + 1)` grid over longitude and
//! latitude; the seam and pole rows are duplicated so uvs stay continuous.
//! Each grid cell becomes two triangles, counter-clockwise seen from outside.

use rand::Rng;

use super::types::{GeometryField, Topology};

/// Lowest tessellation accepted for the mesh.
pub const MIN_SEGMENTS: u32 = 128;

/// Build a UV sphere of `radius` centred at origin. North pole is (0, r, 0).
///
/// `segments` is clamped up to [`MIN_SEGMENTS`].
pub fn generate_uv_sphere(segments: u32, radius: f32, rng: &mut impl Rng) -> GeometryField {
    let segments = segments.max(MIN_SEGMENTS);
    let row = segments + 1;
    let count = (row * row) as usize;

    let mut positions = Vec::with_capacity(count * 3);
    let mut normals = Vec::with_capacity(count * 3);
    let mut uvs = Vec::with_capacity(count * 2);

    for iy in 0..=segments {
        let v = iy as f64 / segments as f64;
        let phi = v * std::f64::consts::PI;
        for ix in 0..=segments {
            let u = ix as f64 / segments as f64;
            let theta = u * std::f64::consts::TAU;
            let n = sphere_normal(theta, phi);

            positions.extend(n.iter().map(|c| c * radius));
            normals.extend_from_slice(&n);
            uvs.extend_from_slice(&[u as f32, 1.0 - v as f32]);
        }
    }

    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
    for iy in 0..segments {
        for ix in 0..segments {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            // Triangle 1: a, b, d
            indices.extend_from_slice(&[a, b, d]);
            // Triangle 2: b, c, d
            indices.extend_from_slice(&[b, c, d]);
        }
    }

    let randoms = (0..count).map(|_| rng.gen::<f32>()).collect();

    GeometryField {
        topology: Topology::Triangles,
        positions,
        normals,
        uvs,
        // Mesh color comes from the elevation palette; base stays white.
        colors: vec![1.0; count * 3],
        sizes: vec![1.0; count],
        randoms,
        indices,
    }
}

/// Unit normal for longitude `theta` and polar angle `phi`.
fn sphere_normal(theta: f64, phi: f64) -> [f32; 3] {
    let sin_phi = phi.sin();
    [
        (-theta.cos() * sin_phi) as f32,
        phi.cos() as f32,
        (theta.sin() * sin_phi) as f32,
    ]
}

// =============================================================================
// Tests
// =============================================================================
