//! Render surface lifecycle: create, resize, draw, dispose.

use crate::animation::FrameState;
use crate::camera::{Camera, CameraSpec};
use crate::geometry::{FieldVertex, GeometryField};
use crate::gpu::{PhysicalSize, RendererError, ViewUniforms};
use crate::host::{Host, SurfaceNodeId, SurfaceSize};

use super::backend::{ContextRequest, GraphicsBackend, RenderContext};

/// Default cap on the device pixel ratio.
pub const DEFAULT_MAX_PIXEL_RATIO: f32 = 2.0;

/// Per-variant surface settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSettings {
    pub max_pixel_ratio: f32,
    pub clear_color: [f32; 4],
    pub vsync: bool,
    pub camera: CameraSpec,
    /// Point sprite size factor at unit view depth.
    pub point_scale: f32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            max_pixel_ratio: DEFAULT_MAX_PIXEL_RATIO,
            clear_color: [1.0, 1.0, 1.0, 1.0],
            vsync: true,
            camera: CameraSpec::default(),
            point_scale: 1.0,
        }
    }
}

/// Describes an initialized surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHandle {
    pub node: SurfaceNodeId,
    /// Drawing-buffer size in physical pixels.
    pub size: PhysicalSize,
    pub pixel_ratio: f32,
}

struct ActiveSurface {
    context: Box<dyn RenderContext>,
    handle: SurfaceHandle,
    camera: Camera,
}

/// Owns at most one render context and the surface node it draws into.
pub struct SurfaceManager<B: GraphicsBackend> {
    backend: B,
    settings: SurfaceSettings,
    active: Option<ActiveSurface>,
}

/// Effective pixel ratio: `min(device, max)`, falling back to 1 for bad input.
pub fn effective_pixel_ratio(device_pixel_ratio: f64, max_pixel_ratio: f32) -> f32 {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio as f32
    } else {
        1.0
    };
    dpr.min(max_pixel_ratio.max(f32::MIN_POSITIVE))
}

/// Drawing-buffer size for a logical size at `pixel_ratio`.
pub fn physical_size(size: SurfaceSize, pixel_ratio: f32) -> PhysicalSize {
    PhysicalSize::new(
        (size.width as f32 * pixel_ratio).round() as u32,
        (size.height as f32 * pixel_ratio).round() as u32,
    )
    .at_least_one()
}

impl<B: GraphicsBackend> SurfaceManager<B> {
    pub fn new(backend: B, settings: SurfaceSettings) -> Self {
        Self {
            backend,
            settings,
            active: None,
        }
    }

    pub fn settings(&self) -> &SurfaceSettings {
        &self.settings
    }

    pub fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    pub fn handle(&self) -> Option<SurfaceHandle> {
        self.active.as_ref().map(|a| a.handle)
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.active.as_ref().map(|a| &a.camera)
    }

    /// Create the render context, then append its surface node to `host`.
    ///
    /// On error nothing has been appended. Calling this while initialized
    /// returns the existing handle.
    pub fn initialize(
        &mut self,
        host: &mut dyn Host,
        size: SurfaceSize,
        field: &GeometryField,
    ) -> Result<SurfaceHandle, RendererError> {
        if let Some(active) = &self.active {
            tracing::warn!("Render surface already initialized");
            return Ok(active.handle);
        }

        let pixel_ratio =
            effective_pixel_ratio(host.device_pixel_ratio(), self.settings.max_pixel_ratio);
        let physical = physical_size(size, pixel_ratio);

        let context = self.backend.create_context(&ContextRequest {
            target: host.surface_target(),
            size: physical,
            topology: field.topology,
            indices: &field.indices,
            clear_color: self.settings.clear_color,
            vsync: self.settings.vsync,
        })?;

        let node = host.append_surface();
        let handle = SurfaceHandle {
            node,
            size: physical,
            pixel_ratio,
        };
        tracing::info!(
            width = physical.width,
            height = physical.height,
            pixel_ratio,
            "Render surface initialized"
        );

        self.active = Some(ActiveSurface {
            context,
            handle,
            camera: Camera::new(self.settings.camera, size.width, size.height),
        });
        Ok(handle)
    }

    /// Resize to a new logical size at the host's current device pixel
    /// ratio. Zero-area sizes are skipped; drawing buffers larger than the
    /// context allows are scaled down to fit.
    ///
    /// Returns `true` when the surface was resized.
    pub fn resize(&mut self, size: SurfaceSize, device_pixel_ratio: f64) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if size.is_empty() {
            tracing::debug!(
                width = size.width,
                height = size.height,
                "Skipping resize to empty container"
            );
            return false;
        }
        let pixel_ratio = effective_pixel_ratio(device_pixel_ratio, self.settings.max_pixel_ratio);
        let requested = physical_size(size, pixel_ratio);
        let physical = requested.fit_within(active.context.max_dimension());
        if physical != requested {
            tracing::debug!(
                width = requested.width,
                height = requested.height,
                "Drawing buffer exceeds device limit, scaling down"
            );
        }
        active.context.resize(physical);
        active.camera.set_viewport(size.width, size.height);
        active.handle.size = physical;
        active.handle.pixel_ratio = pixel_ratio;
        true
    }

    /// Draw one frame. No-op while uninitialized.
    pub fn render_frame(
        &mut self,
        frame: &FrameState,
        vertices: &[FieldVertex],
    ) -> Result<(), RendererError> {
        let Some(active) = self.active.as_mut() else {
            return Ok(());
        };
        let uniforms = ViewUniforms::new(
            active.camera.model_view(frame.rotation_y, frame.rotation_z),
            *active.camera.projection(),
        )
        .with_viewport(active.handle.size.width, active.handle.size.height)
        .with_points(active.handle.pixel_ratio, self.settings.point_scale);
        active.context.draw(&uniforms, vertices)
    }

    /// Read back the last drawn frame.
    pub fn capture(&mut self) -> Result<image::RgbaImage, RendererError> {
        match self.active.as_mut() {
            Some(active) => active.context.capture(),
            None => Err(RendererError::NotInitialized),
        }
    }

    /// Release the context and remove the surface node. Idempotent.
    pub fn dispose(&mut self, host: &mut dyn Host) {
        let Some(mut active) = self.active.take() else {
            return;
        };
        active.context.release();
        host.remove_surface(active.handle.node);
        tracing::info!("Render surface disposed");
    }
}
