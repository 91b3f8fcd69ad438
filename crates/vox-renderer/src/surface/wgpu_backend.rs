//! [`GraphicsBackend`] implementation on wgpu.

use crate::geometry::FieldVertex;
use crate::gpu::{GpuContext, PhysicalSize, RendererError, ViewUniforms};

use super::backend::{ContextRequest, GraphicsBackend, RenderContext};
use super::pipeline::FieldPipeline;
use super::readback;

/// Creates wgpu contexts, blocking on adapter and device requests.
#[derive(Debug, Default, Clone, Copy)]
pub struct WgpuBackend;

impl WgpuBackend {
    pub fn new() -> Self {
        Self
    }
}

impl GraphicsBackend for WgpuBackend {
    fn create_context(
        &mut self,
        request: &ContextRequest<'_>,
    ) -> Result<Box<dyn RenderContext>, RendererError> {
        let gpu = pollster::block_on(GpuContext::new(
            &request.target,
            request.size,
            request.vsync,
        ))?;
        let pipeline = FieldPipeline::new(
            &gpu.device,
            gpu.format(),
            request.topology,
            request.indices,
            gpu.size,
        );
        let [r, g, b, a] = request.clear_color;
        Ok(Box::new(WgpuRenderContext {
            gpu,
            pipeline,
            clear: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
            released: false,
        }))
    }
}

pub struct WgpuRenderContext {
    gpu: GpuContext,
    pipeline: FieldPipeline,
    clear: wgpu::Color,
    released: bool,
}

impl RenderContext for WgpuRenderContext {
    fn resize(&mut self, size: PhysicalSize) {
        self.gpu.resize(size.width, size.height);
        self.pipeline.resize(&self.gpu.device, self.gpu.size);
    }

    fn max_dimension(&self) -> u32 {
        self.gpu.max_dimension()
    }

    fn draw(
        &mut self,
        uniforms: &ViewUniforms,
        vertices: &[FieldVertex],
    ) -> Result<(), RendererError> {
        if self.released {
            return Err(RendererError::NotInitialized);
        }
        let Some(frame) = self.gpu.acquire()? else {
            return Ok(());
        };

        self.pipeline
            .upload(&self.gpu.device, &self.gpu.queue, uniforms, vertices);

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("field frame encoder"),
            });
        self.pipeline.render(&mut encoder, &frame.view, self.clear);
        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn capture(&mut self) -> Result<image::RgbaImage, RendererError> {
        let texture = self.gpu.offscreen_texture().ok_or_else(|| {
            RendererError::ReadbackError("window surfaces cannot be captured".into())
        })?;
        readback::read_texture(&self.gpu.device, &self.gpu.queue, texture, self.gpu.size)
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.pipeline.destroy();
        self.gpu.release();
        self.released = true;
    }
}
