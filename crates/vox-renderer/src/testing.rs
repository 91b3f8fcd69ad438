//! In-memory graphics backend for lifecycle tests.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::FieldVertex;
use crate::gpu::{PhysicalSize, RendererError, ViewUniforms, MAX_SURFACE_DIMENSION};
use crate::surface::{ContextRequest, GraphicsBackend, RenderContext};

#[derive(Debug, Default)]
pub struct BackendLog {
    pub created: usize,
    pub released: usize,
    pub draws: usize,
    pub requested_size: Option<PhysicalSize>,
    pub resizes: Vec<PhysicalSize>,
    pub last_uniforms: Option<ViewUniforms>,
    pub last_vertex_count: usize,
}

/// Records every call; optionally refuses to create contexts.
///
/// Enforces a maximum drawing-buffer side like a real device does.
#[derive(Debug, Clone)]
pub struct FakeBackend {
    pub log: Rc<RefCell<BackendLog>>,
    pub fail: bool,
    pub max_dimension: u32,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            log: Rc::default(),
            fail: false,
            max_dimension: MAX_SURFACE_DIMENSION,
        }
    }
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self {
            max_dimension,
            ..Self::default()
        }
    }
}

impl GraphicsBackend for FakeBackend {
    fn create_context(
        &mut self,
        request: &ContextRequest<'_>,
    ) -> Result<Box<dyn RenderContext>, RendererError> {
        if self.fail {
            return Err(RendererError::AdapterNotFound);
        }
        let size = request.size.check_within(self.max_dimension)?;
        let mut log = self.log.borrow_mut();
        log.created += 1;
        log.requested_size = Some(size);
        Ok(Box::new(FakeContext {
            log: self.log.clone(),
            size,
            max_dimension: self.max_dimension,
        }))
    }
}

struct FakeContext {
    log: Rc<RefCell<BackendLog>>,
    size: PhysicalSize,
    max_dimension: u32,
}

impl RenderContext for FakeContext {
    fn resize(&mut self, size: PhysicalSize) {
        self.size = size;
        self.log.borrow_mut().resizes.push(size);
    }

    fn max_dimension(&self) -> u32 {
        self.max_dimension
    }

    fn draw(
        &mut self,
        uniforms: &ViewUniforms,
        vertices: &[FieldVertex],
    ) -> Result<(), RendererError> {
        let mut log = self.log.borrow_mut();
        log.draws += 1;
        log.last_uniforms = Some(*uniforms);
        log.last_vertex_count = vertices.len();
        Ok(())
    }

    fn capture(&mut self) -> Result<image::RgbaImage, RendererError> {
        Ok(image::RgbaImage::new(self.size.width, self.size.height))
    }

    fn release(&mut self) {
        self.log.borrow_mut().released += 1;
    }
}
