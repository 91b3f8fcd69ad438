//! Perspective camera and model transform for the visual field.

pub mod matrix;

use matrix::Mat4;

/// Camera placement for one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpec {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Camera position; the camera looks down -Z without rotation.
    pub position: [f32; 3],
    /// Uniform scale applied to the whole field.
    pub model_scale: f32,
}

impl Default for CameraSpec {
    fn default() -> Self {
        Self {
            fov_y: 45f32.to_radians(),
            position: [0.0, 0.0, 8.0],
            model_scale: 1.0,
        }
    }
}

/// Live camera: spec plus the current viewport aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub spec: CameraSpec,
    aspect: f32,
    projection: Mat4,
}

impl Camera {
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 1000.0;

    pub fn new(spec: CameraSpec, width: u32, height: u32) -> Self {
        let aspect = aspect_of(width, height);
        Self {
            spec,
            aspect,
            projection: matrix::perspective(spec.fov_y, aspect, Self::NEAR, Self::FAR),
        }
    }

    /// Recompute the projection for a new viewport. Zero-area sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.aspect = aspect_of(width, height);
        self.projection = matrix::perspective(self.spec.fov_y, self.aspect, Self::NEAR, Self::FAR);
        true
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Model-view matrix: view · rotate_y · rotate_z · scale.
    pub fn model_view(&self, rotation_y: f32, rotation_z: f32) -> Mat4 {
        let [x, y, z] = self.spec.position;
        let view = matrix::translate(-x, -y, -z);
        let model = matrix::mul(
            &matrix::rotate_y(rotation_y),
            &matrix::mul(
                &matrix::rotate_z(rotation_z),
                &matrix::scale(self.spec.model_scale),
            ),
        );
        matrix::mul(&view, &model)
    }
}

fn aspect_of(width: u32, height: u32) -> f32 {
    if width == 0 || height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_follows_viewport() {
        let mut cam = Camera::new(CameraSpec::default(), 1920, 1080);
        assert!((cam.aspect() - 1920.0 / 1080.0).abs() < 1e-5);
        assert!(cam.set_viewport(800, 800));
        assert!((cam.aspect() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_viewport_keeps_previous_projection() {
        let mut cam = Camera::new(CameraSpec::default(), 1600, 900);
        let before = *cam.projection();
        assert!(!cam.set_viewport(0, 900));
        assert!(!cam.set_viewport(1600, 0));
        assert_eq!(*cam.projection(), before);
    }

    #[test]
    fn model_view_places_origin_in_front_of_camera() {
        let cam = Camera::new(CameraSpec::default(), 100, 100);
        let mv = cam.model_view(0.3, 0.1);
        let p = matrix::transform_point(&mv, [0.0, 0.0, 0.0]);
        assert!((p[2] + 8.0).abs() < 1e-5);
    }

    #[test]
    fn model_view_changes_with_rotation() {
        let cam = Camera::new(CameraSpec::default(), 100, 100);
        let a = cam.model_view(0.0, 0.0);
        let b = cam.model_view(1.0, 0.0);
        let diff: f32 = a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum();
        assert!(diff > 0.01, "rotation should change the model-view matrix");
    }
}
