pub mod animation;
pub mod binder;
pub mod camera;
pub mod displacement;
pub mod geometry;
pub mod gpu;
pub mod host;
pub mod perf;
pub mod pointer;
pub mod surface;
pub mod visualizer;

#[cfg(test)]
mod testing;

pub use animation::{AnimationLoop, FrameState, FrameTick, LoopState};
pub use binder::{LifecycleBinder, VisualError};
pub use geometry::{FieldVertex, GeometryField, GeometrySpec};
pub use gpu::{GpuContext, RendererError};
pub use host::{HeadlessHost, Host, SurfaceSize, SurfaceTarget};
pub use perf::FrameTimer;
pub use pointer::PointerTracker;
pub use surface::{GraphicsBackend, RenderContext, SurfaceManager, WgpuBackend};
pub use visualizer::{create_profile, VariantProfile};
