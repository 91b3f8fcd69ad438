use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

/// Size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Handle of a surface node appended to the host's child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceNodeId(pub u64);

/// Handle of a registered pointer or resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Handle of one requested display frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequestId(pub u64);

/// What the render context draws into.
#[derive(Debug, Clone)]
pub enum SurfaceTarget {
    /// A texture that is never presented; pixels can be read back.
    Offscreen,
    /// A native window.
    Window(Arc<winit::window::Window>),
}

/// Map viewport pixels to `[-1, 1]²` with +Y up.
///
/// Returns `None` when the viewport has a zero dimension.
pub fn normalize_pointer(x: f64, y: f64, viewport: SurfaceSize) -> Option<[f32; 2]> {
    if viewport.is_empty() {
        return None;
    }
    let nx = (x / viewport.width as f64) * 2.0 - 1.0;
    let ny = -(y / viewport.height as f64) * 2.0 + 1.0;
    Some([nx as f32, ny as f32])
}

/// Single-writer store for the latest normalized pointer position.
///
/// Hosts call [`PointerSink::record`] from their event handler; the frame
/// tick reads the value back through the owning tracker.
#[derive(Debug, Clone, Default)]
pub struct PointerSink {
    latest: Rc<Cell<Option<[f32; 2]>>>,
}

impl PointerSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a pointer position given in viewport pixels.
    pub fn record(&self, x: f64, y: f64, viewport: SurfaceSize) {
        if let Some(p) = normalize_pointer(x, y, viewport) {
            self.latest.set(Some(p));
        }
    }

    /// Latest normalized sample, if any was recorded.
    pub fn latest(&self) -> Option<[f32; 2]> {
        self.latest.get()
    }
}

/// Single-writer store for the latest container size.
#[derive(Debug, Clone, Default)]
pub struct ResizeSink {
    pending: Rc<Cell<Option<SurfaceSize>>>,
}

impl ResizeSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a new container size; later calls overwrite earlier ones.
    pub fn record(&self, size: SurfaceSize) {
        self.pending.set(Some(size));
    }

    /// Take the pending size, leaving nothing behind.
    pub fn take(&self) -> Option<SurfaceSize> {
        self.pending.take()
    }
}
