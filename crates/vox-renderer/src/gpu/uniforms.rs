//! GPU uniform buffer shared by the point and mesh shaders.
//!
//! `ViewUniforms` is the single uniform block uploaded each frame.

use crate::camera::matrix::Mat4;

/// GPU-side uniform buffer matching the WGSL `View` struct.
///
/// Layout: 2 × mat4 + 4 × f32 = 144 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniforms {
    /// Model-view matrix (column-major).
    pub model_view: Mat4,
    /// Projection matrix (column-major).
    pub projection: Mat4,
    /// Render target size in physical pixels.
    pub viewport: [f32; 2],
    /// Effective device pixel ratio (already capped).
    pub pixel_ratio: f32,
    /// Point sprite size factor at unit view depth.
    pub point_scale: f32,
}

impl ViewUniforms {
    pub fn new(model_view: Mat4, projection: Mat4) -> Self {
        Self {
            model_view,
            projection,
            viewport: [1.0, 1.0],
            pixel_ratio: 1.0,
            point_scale: 1.0,
        }
    }

    /// Update viewport dimensions. Zero dimensions are clamped to one pixel.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = [width.max(1) as f32, height.max(1) as f32];
        self
    }

    pub fn with_points(mut self, pixel_ratio: f32, point_scale: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self.point_scale = point_scale;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::matrix::IDENTITY;

    #[test]
    fn uniforms_size_is_144_bytes() {
        assert_eq!(std::mem::size_of::<ViewUniforms>(), 144);
        assert_eq!(std::mem::size_of::<ViewUniforms>() % 16, 0);
    }

    #[test]
    fn uniforms_alignment_is_4_bytes() {
        assert_eq!(std::mem::align_of::<ViewUniforms>(), 4);
    }

    #[test]
    fn with_viewport_clamps_zero() {
        let u = ViewUniforms::new(IDENTITY, IDENTITY).with_viewport(0, 600);
        assert_eq!(u.viewport, [1.0, 600.0]);
    }

    #[test]
    fn bytemuck_cast_works() {
        let u = ViewUniforms::new(IDENTITY, IDENTITY).with_points(2.0, 200.0);
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 144);
    }
}
