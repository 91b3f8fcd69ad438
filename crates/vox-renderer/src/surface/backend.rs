//! The seam between surface lifecycle and the graphics API.

use crate::geometry::{FieldVertex, Topology};
use crate::gpu::{PhysicalSize, RendererError, ViewUniforms};
use crate::host::SurfaceTarget;

/// Everything a backend needs to create a render context.
#[derive(Debug, Clone)]
pub struct ContextRequest<'a> {
    pub target: SurfaceTarget,
    /// Drawing-buffer size (logical size × pixel ratio).
    pub size: PhysicalSize,
    pub topology: Topology,
    /// Mesh triangle indices; empty for point clouds.
    pub indices: &'a [u32],
    /// Straight (non-premultiplied) RGBA clear color.
    pub clear_color: [f32; 4],
    pub vsync: bool,
}

/// Creates render contexts.
pub trait GraphicsBackend {
    fn create_context(
        &mut self,
        request: &ContextRequest<'_>,
    ) -> Result<Box<dyn RenderContext>, RendererError>;
}

/// One live rendering context and the GPU resources it owns.
pub trait RenderContext {
    /// Resize the drawing buffer.
    fn resize(&mut self, size: PhysicalSize);

    /// Largest drawing-buffer side this context can allocate.
    fn max_dimension(&self) -> u32;

    /// Clear and draw one frame.
    fn draw(
        &mut self,
        uniforms: &ViewUniforms,
        vertices: &[FieldVertex],
    ) -> Result<(), RendererError>;

    /// Read back the last drawn frame.
    fn capture(&mut self) -> Result<image::RgbaImage, RendererError>;

    /// Destroy buffers, pipelines and textures. Called once before drop.
    fn release(&mut self);
}
