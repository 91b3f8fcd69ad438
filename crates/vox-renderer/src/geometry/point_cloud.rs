//! Fibonacci point cloud on a sphere shell.

use rand::Rng;

use super::types::{GeometryField, Topology};

/// Distribute `count` points evenly over a sphere of `radius`.
///
/// Point `i` sits at polar angle `acos(-1 + 2i/N)` with longitude
/// `sqrt(N·π)·phi`. Each point picks one palette color at random, a size in
/// `size_range` and a random phase in `[0, 1)`.
pub fn generate_point_cloud(
    count: u32,
    radius: f32,
    palette: [[f32; 3]; 2],
    size_range: (f32, f32),
    rng: &mut impl Rng,
) -> GeometryField {
    let n = count as usize;
    let mut positions = Vec::with_capacity(n * 3);
    let mut normals = Vec::with_capacity(n * 3);
    let mut uvs = Vec::with_capacity(n * 2);
    let mut colors = Vec::with_capacity(n * 3);
    let mut sizes = Vec::with_capacity(n);
    let mut randoms = Vec::with_capacity(n);

    let spiral = (count as f64 * std::f64::consts::PI).sqrt();
    let (size_min, size_max) = size_range;

    for i in 0..n {
        let phi = (-1.0 + 2.0 * i as f64 / count as f64).acos();
        let theta = spiral * phi;

        let normal = [
            (theta.cos() * phi.sin()) as f32,
            (theta.sin() * phi.sin()) as f32,
            phi.cos() as f32,
        ];
        positions.extend(normal.iter().map(|c| c * radius));
        normals.extend_from_slice(&normal);
        uvs.extend_from_slice(&[
            (theta.rem_euclid(std::f64::consts::TAU) / std::f64::consts::TAU) as f32,
            (phi / std::f64::consts::PI) as f32,
        ]);

        let color = if rng.gen_bool(0.5) {
            palette[0]
        } else {
            palette[1]
        };
        colors.extend_from_slice(&color);

        sizes.push(if size_max > size_min {
            rng.gen_range(size_min..size_max)
        } else {
            size_min
        });
        randoms.push(rng.gen::<f32>());
    }

    GeometryField {
        topology: Topology::Points,
        positions,
        normals,
        uvs,
        colors,
        sizes,
        randoms,
        indices: Vec::new(),
    }
}
