//! [`Host`] backed by a winit window.
//!
//! Listener and frame bookkeeping is delegated to a [`HeadlessHost`]; this
//! type translates window events into logical pixels and turns frame
//! requests into `request_redraw` calls.

use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::window::Window;

use vox_renderer::host::{
    FrameRequestId, HeadlessHost, Host, ListenerId, PointerSink, ResizeSink, SurfaceNodeId,
    SurfaceSize, SurfaceTarget,
};

pub struct WindowHost {
    window: Arc<Window>,
    registry: HeadlessHost,
}

impl WindowHost {
    pub fn new(window: Arc<Window>) -> Self {
        let size = logical_size(window.inner_size(), window.scale_factor());
        Self {
            registry: HeadlessHost::new(size.width, size.height),
            window,
        }
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Forward a cursor move to the pointer listeners.
    pub fn dispatch_pointer(&self, position: PhysicalPosition<f64>) {
        let logical = position.to_logical::<f64>(self.window.scale_factor());
        self.registry.dispatch_pointer(logical.x, logical.y);
    }

    /// Forward a window resize to the resize listeners.
    pub fn dispatch_resize(&mut self, size: PhysicalSize<u32>) {
        let size = logical_size(size, self.window.scale_factor());
        self.registry.dispatch_resize(size.width, size.height);
    }

    /// Frame requests to deliver on this redraw, oldest first.
    pub fn take_frame_requests(&mut self) -> Vec<FrameRequestId> {
        self.registry.take_frame_requests()
    }
}

impl Host for WindowHost {
    fn container_size(&self) -> SurfaceSize {
        self.registry.container_size()
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.scale_factor()
    }

    fn viewport_size(&self) -> SurfaceSize {
        self.registry.viewport_size()
    }

    fn surface_target(&self) -> SurfaceTarget {
        SurfaceTarget::Window(self.window.clone())
    }

    fn append_surface(&mut self) -> SurfaceNodeId {
        self.registry.append_surface()
    }

    fn remove_surface(&mut self, id: SurfaceNodeId) {
        self.registry.remove_surface(id);
    }

    fn child_count(&self) -> usize {
        self.registry.child_count()
    }

    fn add_pointer_listener(&mut self, sink: PointerSink) -> ListenerId {
        self.registry.add_pointer_listener(sink)
    }

    fn add_resize_listener(&mut self, sink: ResizeSink) -> ListenerId {
        self.registry.add_resize_listener(sink)
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.registry.remove_listener(id);
    }

    fn listener_count(&self) -> usize {
        self.registry.listener_count()
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = self.registry.request_frame();
        self.window.request_redraw();
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        self.registry.cancel_frame(id);
    }
}

/// Physical window size to logical pixels, rounded.
pub(super) fn logical_size(size: PhysicalSize<u32>, scale_factor: f64) -> SurfaceSize {
    let logical = size.to_logical::<f64>(scale_factor);
    SurfaceSize::new(logical.width.round() as u32, logical.height.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_size_divides_by_scale() {
        assert_eq!(
            logical_size(PhysicalSize::new(2560, 1600), 2.0),
            SurfaceSize::new(1280, 800)
        );
        assert_eq!(
            logical_size(PhysicalSize::new(1203, 901), 1.5),
            SurfaceSize::new(802, 601)
        );
    }

    #[test]
    fn minimized_window_is_empty() {
        assert!(logical_size(PhysicalSize::new(0, 0), 1.0).is_empty());
    }
}
