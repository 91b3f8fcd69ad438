//! The container a visual is mounted into.
//!
//! A [`Host`] owns the child list the render surface is appended to, the
//! pointer/resize listener registry and display-frame scheduling. The
//! library ships [`HeadlessHost`]; the app crate backs the same trait with
//! a winit window.

mod headless;
mod types;

pub use headless::*;
pub use types::*;

/// Embedding environment of a mounted visual.
pub trait Host {
    /// Client size of the container in logical pixels.
    fn container_size(&self) -> SurfaceSize;

    fn device_pixel_ratio(&self) -> f64;

    /// Size used to normalize pointer coordinates.
    fn viewport_size(&self) -> SurfaceSize;

    fn surface_target(&self) -> SurfaceTarget;

    fn append_surface(&mut self) -> SurfaceNodeId;

    fn remove_surface(&mut self, id: SurfaceNodeId);

    fn child_count(&self) -> usize;

    fn add_pointer_listener(&mut self, sink: PointerSink) -> ListenerId;

    fn add_resize_listener(&mut self, sink: ResizeSink) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId);

    fn listener_count(&self) -> usize;

    /// Ask for one display frame. The id comes back with the tick.
    fn request_frame(&mut self) -> FrameRequestId;

    fn cancel_frame(&mut self, id: FrameRequestId);
}
