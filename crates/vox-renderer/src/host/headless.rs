//! In-memory host used by tests and offline snapshots.

use super::types::{
    FrameRequestId, ListenerId, PointerSink, ResizeSink, SurfaceNodeId, SurfaceSize,
    SurfaceTarget,
};
use super::Host;

/// A host with no window: events and frames are driven by hand.
#[derive(Debug)]
pub struct HeadlessHost {
    container: SurfaceSize,
    viewport: SurfaceSize,
    pixel_ratio: f64,
    next_id: u64,
    children: Vec<SurfaceNodeId>,
    pointer_listeners: Vec<(ListenerId, PointerSink)>,
    resize_listeners: Vec<(ListenerId, ResizeSink)>,
    pending_frames: Vec<FrameRequestId>,
}

impl HeadlessHost {
    /// A container (and viewport) of `width × height` logical pixels.
    pub fn new(width: u32, height: u32) -> Self {
        let size = SurfaceSize::new(width, height);
        Self {
            container: size,
            viewport: size,
            pixel_ratio: 1.0,
            next_id: 1,
            children: Vec::new(),
            pointer_listeners: Vec::new(),
            resize_listeners: Vec::new(),
            pending_frames: Vec::new(),
        }
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    /// Change the device pixel ratio, as when a window moves to another
    /// display. Listeners learn of it through the next resize.
    pub fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratio = ratio;
    }

    /// Deliver a pointer move at viewport pixel `(x, y)` to every listener.
    pub fn dispatch_pointer(&self, x: f64, y: f64) {
        for (_, sink) in &self.pointer_listeners {
            sink.record(x, y, self.viewport);
        }
    }

    /// Resize container and viewport, then notify every listener.
    pub fn dispatch_resize(&mut self, width: u32, height: u32) {
        let size = SurfaceSize::new(width, height);
        self.container = size;
        self.viewport = size;
        for (_, sink) in &self.resize_listeners {
            sink.record(size);
        }
    }

    /// Drain the outstanding frame requests in request order.
    pub fn take_frame_requests(&mut self) -> Vec<FrameRequestId> {
        std::mem::take(&mut self.pending_frames)
    }

    pub fn pending_frame_count(&self) -> usize {
        self.pending_frames.len()
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Host for HeadlessHost {
    fn container_size(&self) -> SurfaceSize {
        self.container
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    fn viewport_size(&self) -> SurfaceSize {
        self.viewport
    }

    fn surface_target(&self) -> SurfaceTarget {
        SurfaceTarget::Offscreen
    }

    fn append_surface(&mut self) -> SurfaceNodeId {
        let id = SurfaceNodeId(self.next());
        self.children.push(id);
        id
    }

    fn remove_surface(&mut self, id: SurfaceNodeId) {
        self.children.retain(|c| *c != id);
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn add_pointer_listener(&mut self, sink: PointerSink) -> ListenerId {
        let id = ListenerId(self.next());
        self.pointer_listeners.push((id, sink));
        id
    }

    fn add_resize_listener(&mut self, sink: ResizeSink) -> ListenerId {
        let id = ListenerId(self.next());
        self.resize_listeners.push((id, sink));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) {
        self.pointer_listeners.retain(|(l, _)| *l != id);
        self.resize_listeners.retain(|(l, _)| *l != id);
    }

    fn listener_count(&self) -> usize {
        self.pointer_listeners.len() + self.resize_listeners.len()
    }

    fn request_frame(&mut self) -> FrameRequestId {
        let id = FrameRequestId(self.next());
        self.pending_frames.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameRequestId) {
        self.pending_frames.retain(|f| *f != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_append_and_remove() {
        let mut host = HeadlessHost::new(800, 600);
        let a = host.append_surface();
        let b = host.append_surface();
        assert_ne!(a, b);
        assert_eq!(host.child_count(), 2);
        host.remove_surface(a);
        host.remove_surface(a);
        assert_eq!(host.child_count(), 1);
    }

    #[test]
    fn dispatch_reaches_registered_sinks_only() {
        let mut host = HeadlessHost::new(200, 100);
        let pointer = PointerSink::new();
        let id = host.add_pointer_listener(pointer.clone());
        host.dispatch_pointer(200.0, 0.0);
        assert_eq!(pointer.latest(), Some([1.0, 1.0]));

        host.remove_listener(id);
        assert_eq!(host.listener_count(), 0);
        host.dispatch_pointer(0.0, 100.0);
        assert_eq!(pointer.latest(), Some([1.0, 1.0]));
    }

    #[test]
    fn dispatch_resize_updates_container() {
        let mut host = HeadlessHost::new(200, 100);
        let sink = ResizeSink::new();
        host.add_resize_listener(sink.clone());
        host.dispatch_resize(640, 480);
        assert_eq!(host.container_size(), SurfaceSize::new(640, 480));
        assert_eq!(sink.take(), Some(SurfaceSize::new(640, 480)));
    }

    #[test]
    fn frame_requests_drain_and_cancel() {
        let mut host = HeadlessHost::new(1, 1);
        let a = host.request_frame();
        let b = host.request_frame();
        host.cancel_frame(a);
        assert_eq!(host.take_frame_requests(), vec![b]);
        assert_eq!(host.pending_frame_count(), 0);
    }
}
