//! Color helpers: smoothstep blends, the elevation palette and the rim term.

use super::types::{RimLight, Shading};

/// Hermite interpolation between `edge0` and `edge1`, clamped to `[0, 1]`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Base color for a vertex with attribute color `base` at `elevation`.
pub fn shade(shading: &Shading, base: [f32; 3], elevation: f32) -> [f32; 3] {
    match *shading {
        Shading::VertexColor => base,
        Shading::Elevation {
            shadow,
            core,
            highlight,
        } => {
            let c = mix(shadow, core, smoothstep(-0.2, 0.2, elevation));
            mix(c, highlight, smoothstep(0.1, 0.3, elevation))
        }
    }
}

/// Rim contribution for a view-space normal (camera looks down -Z).
pub fn rim(light: &RimLight, view_normal: [f32; 3]) -> [f32; 3] {
    if light.strength == 0.0 {
        return [0.0; 3];
    }
    let facing = view_normal[2].max(0.0);
    let fresnel = (1.0 - facing).max(0.0).powf(light.power) * light.strength;
    [
        light.color[0] * fresnel,
        light.color[1] * fresnel,
        light.color[2] * fresnel,
    ]
}

pub fn clamp01(c: [f32; 3]) -> [f32; 3] {
    [
        c[0].clamp(0.0, 1.0),
        c[1].clamp(0.0, 1.0),
        c[2].clamp(0.0, 1.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHADOW: [f32; 3] = [0.0, 0.0, 1.0];
    const CORE: [f32; 3] = [0.0, 1.0, 0.0];
    const HIGHLIGHT: [f32; 3] = [1.0, 0.0, 0.0];

    fn palette() -> Shading {
        Shading::Elevation {
            shadow: SHADOW,
            core: CORE,
            highlight: HIGHLIGHT,
        }
    }

    #[test]
    fn smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn elevation_palette_stops() {
        assert_eq!(shade(&palette(), [1.0; 3], -1.0), SHADOW);
        assert_eq!(shade(&palette(), [1.0; 3], 1.0), HIGHLIGHT);
        // Past the core blend but before the highlight starts.
        let mid = shade(&palette(), [1.0; 3], 0.05);
        assert!(mid[1] > 0.5 && mid[0] == 0.0);
    }

    #[test]
    fn vertex_color_passes_through() {
        let base = [0.2, 0.4, 0.6];
        assert_eq!(shade(&Shading::VertexColor, base, 0.9), base);
    }

    #[test]
    fn rim_is_zero_facing_camera_and_full_at_silhouette() {
        let light = RimLight {
            color: [1.0, 0.5, 0.0],
            power: 3.0,
            strength: 0.8,
        };
        assert_eq!(rim(&light, [0.0, 0.0, 1.0]), [0.0, 0.0, 0.0]);
        let edge = rim(&light, [1.0, 0.0, 0.0]);
        assert!((edge[0] - 0.8).abs() < 1e-6);
        assert!((edge[1] - 0.4).abs() < 1e-6);
    }

    #[test]
    fn rim_off_contributes_nothing() {
        assert_eq!(rim(&RimLight::OFF, [1.0, 0.0, 0.0]), [0.0; 3]);
    }

    #[test]
    fn clamp01_bounds_channels() {
        assert_eq!(clamp01([-0.5, 0.5, 1.5]), [0.0, 0.5, 1.0]);
    }
}
