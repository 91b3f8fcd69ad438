//! Base geometry for both variants: a Fibonacci point cloud and a
//! tessellated UV sphere, each with seeded per-vertex attributes.
//!
//! Geometry is generated once per mount and never mutated; per-frame
//! displacement writes into a separate [`FieldVertex`] buffer.

mod point_cloud;
mod types;
mod uv_sphere;

pub use point_cloud::*;
pub use types::*;
pub use uv_sphere::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

impl GeometryField {
    /// Build the field described by `spec`. Identical seeds give identical fields.
    pub fn build(spec: &GeometrySpec, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let field = match *spec {
            GeometrySpec::PointCloud {
                count,
                radius,
                palette,
                size_range,
            } => generate_point_cloud(count, radius, palette, size_range, &mut rng),
            GeometrySpec::UvSphere { segments, radius } => {
                generate_uv_sphere(segments, radius, &mut rng)
            }
        };
        tracing::debug!(
            vertices = field.len(),
            indices = field.indices.len(),
            "Built geometry field"
        );
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud_spec() -> GeometrySpec {
        GeometrySpec::PointCloud {
            count: 2_000,
            radius: 2.2,
            palette: [[0.3, 0.3, 0.9], [0.2, 0.5, 1.0]],
            size_range: (0.5, 3.0),
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        assert_eq!(
            GeometryField::build(&cloud_spec(), 42),
            GeometryField::build(&cloud_spec(), 42)
        );
        let mesh = GeometrySpec::UvSphere {
            segments: 128,
            radius: 1.0,
        };
        assert_eq!(
            GeometryField::build(&mesh, 42),
            GeometryField::build(&mesh, 42)
        );
    }

    #[test]
    fn different_seed_changes_attributes_not_positions() {
        let a = GeometryField::build(&cloud_spec(), 1);
        let b = GeometryField::build(&cloud_spec(), 2);
        assert_eq!(a.positions, b.positions);
        assert_ne!(a.randoms, b.randoms);
    }

    #[test]
    fn build_picks_topology() {
        assert_eq!(
            GeometryField::build(&cloud_spec(), 0).topology,
            Topology::Points
        );
        let mesh = GeometrySpec::UvSphere {
            segments: 128,
            radius: 1.0,
        };
        assert_eq!(
            GeometryField::build(&mesh, 0).topology,
            Topology::Triangles
        );
    }
}
