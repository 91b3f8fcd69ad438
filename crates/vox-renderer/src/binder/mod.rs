//! Mount/unmount of a visual onto a host container.
//!
//! `attach` measures the container, builds geometry, initializes the
//! surface, registers the pointer and resize listeners and starts the
//! animation loop. `detach` undoes all of it in reverse and is safe to call
//! from any state.

mod types;

pub use types::*;

use crate::animation::{AnimationLoop, FrameTick, LoopState};
use crate::displacement::Displacer;
use crate::geometry::{FieldVertex, GeometryField};
use crate::host::{Host, ListenerId, ResizeSink};
use crate::perf::FrameTimer;
use crate::pointer::PointerTracker;
use crate::surface::{GraphicsBackend, SurfaceManager};
use crate::visualizer::VariantProfile;

/// Resources that exist only while attached.
struct Mount {
    field: GeometryField,
    pointer: PointerTracker,
    resize: ResizeSink,
    listeners: Vec<ListenerId>,
    animation: AnimationLoop,
    /// Per-frame output, reused across frames.
    vertices: Vec<FieldVertex>,
}

/// Binds one variant to a host for the lifetime of a mount.
pub struct LifecycleBinder<B: GraphicsBackend> {
    profile: VariantProfile,
    surface: SurfaceManager<B>,
    displacer: Displacer,
    mount: Option<Mount>,
    frame_timer: FrameTimer,
}

impl<B: GraphicsBackend> LifecycleBinder<B> {
    pub fn new(profile: VariantProfile, backend: B) -> Self {
        Self {
            surface: SurfaceManager::new(backend, profile.surface),
            displacer: Displacer::new(profile.displacement),
            profile,
            mount: None,
            frame_timer: FrameTimer::new(),
        }
    }

    pub fn profile(&self) -> &VariantProfile {
        &self.profile
    }

    pub fn is_attached(&self) -> bool {
        self.mount.is_some()
    }

    pub fn loop_state(&self) -> LoopState {
        self.mount
            .as_ref()
            .map_or(LoopState::Idle, |m| m.animation.state())
    }

    pub fn surface(&self) -> &SurfaceManager<B> {
        &self.surface
    }

    pub fn frame_timer(&self) -> &FrameTimer {
        &self.frame_timer
    }

    /// Mount onto `host`, starting the clock at host time `now`.
    ///
    /// On error the host is left exactly as it was.
    pub fn attach(&mut self, host: &mut dyn Host, now: f64) -> Result<(), VisualError> {
        if self.mount.is_some() {
            return Err(VisualError::AlreadyAttached);
        }

        let size = host.container_size();
        if size.is_empty() {
            return Err(VisualError::EmptyContainer {
                width: size.width,
                height: size.height,
            });
        }

        let field = GeometryField::build(&self.profile.geometry, self.profile.seed);

        self.surface
            .initialize(host, size, &field)
            .map_err(VisualError::Initialization)?;

        let pointer = PointerTracker::new(self.profile.pointer_smoothing);
        let resize = ResizeSink::new();
        let listeners = vec![
            host.add_pointer_listener(pointer.sink()),
            host.add_resize_listener(resize.clone()),
        ];

        let mut animation = AnimationLoop::new(self.profile.rotation);
        animation.start(host, now);

        tracing::info!(
            variant = %self.profile.variant,
            vertices = field.len(),
            width = size.width,
            height = size.height,
            "Visual attached"
        );

        self.frame_timer.reset();
        self.mount = Some(Mount {
            vertices: Vec::with_capacity(field.len()),
            field,
            pointer,
            resize,
            listeners,
            animation,
        });
        Ok(())
    }

    /// Unmount from `host`. Safe to call repeatedly or before `attach`.
    pub fn detach(&mut self, host: &mut dyn Host) {
        let Some(mut mount) = self.mount.take() else {
            self.surface.dispose(host);
            return;
        };

        mount.animation.stop(host);
        for id in mount.listeners.drain(..) {
            host.remove_listener(id);
        }
        self.surface.dispose(host);
        drop(mount);

        tracing::info!(variant = %self.profile.variant, "Visual detached");
    }

    /// Handle a display frame from the host.
    ///
    /// Returns `Ok(false)` when the tick was not for this mount.
    pub fn on_frame(&mut self, host: &mut dyn Host, tick: FrameTick) -> Result<bool, VisualError> {
        let Self {
            surface,
            displacer,
            mount,
            frame_timer,
            ..
        } = self;
        let Some(mount) = mount.as_mut() else {
            return Ok(false);
        };
        if !mount.animation.accepts(&tick) {
            return Ok(false);
        }

        if let Some(size) = mount.resize.take() {
            surface.resize(size, host.device_pixel_ratio());
        }
        let pointer = mount.pointer.advance();

        let Some(frame) = mount.animation.tick(host, tick, pointer) else {
            return Ok(false);
        };

        displacer.displace_field(&mount.field, &frame, &mut mount.vertices);
        if let Err(e) = surface.render_frame(&frame, &mount.vertices) {
            tracing::error!("Render failed: {e}");
            return Err(e.into());
        }
        frame_timer.record(tick.timestamp);
        Ok(true)
    }

    /// Read back the last drawn frame.
    pub fn capture(&mut self) -> Result<image::RgbaImage, VisualError> {
        Ok(self.surface.capture()?)
    }
}

#[cfg(test)]
mod tests;
