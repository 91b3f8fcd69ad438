//! Frame scheduler: an Idle/Running state machine over host frame requests.
//!
//! While running the loop holds exactly one outstanding
//! [`FrameRequestId`]. A tick carrying any other id is ignored, so frames
//! requested before a `stop` can never reach the renderer.

mod types;

pub use types::*;

use crate::host::Host;

/// Smallest elapsed-time advance between two emitted frames (seconds).
pub const MIN_FRAME_STEP: f64 = 1e-3;

#[derive(Debug)]
pub struct AnimationLoop {
    rotation: RotationLaw,
    state: LoopState,
}

impl AnimationLoop {
    pub fn new(rotation: RotationLaw) -> Self {
        Self {
            rotation,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// True when `tick` carries the one frame request this loop is waiting for.
    pub fn accepts(&self, tick: &FrameTick) -> bool {
        matches!(self.state, LoopState::Running { pending, .. } if pending == tick.id)
    }

    /// Start the clock at host time `now` and request the first frame.
    ///
    /// No-op while already running.
    pub fn start(&mut self, host: &mut dyn Host, now: f64) {
        if self.is_running() {
            return;
        }
        let pending = host.request_frame();
        self.state = LoopState::Running {
            pending,
            started_at: now,
            last_elapsed: None,
        };
        tracing::debug!(?pending, "Animation loop started");
    }

    /// Cancel the outstanding frame and go idle. No-op while idle.
    pub fn stop(&mut self, host: &mut dyn Host) {
        if let LoopState::Running { pending, .. } = self.state {
            host.cancel_frame(pending);
            self.state = LoopState::Idle;
            tracing::debug!("Animation loop stopped");
        }
    }

    /// Advance the clock for a delivered frame.
    ///
    /// Returns `None` for ticks the loop did not request (stale ids or any
    /// tick after `stop`). Otherwise requests the next frame and returns the
    /// frame state for this one.
    pub fn tick(
        &mut self,
        host: &mut dyn Host,
        tick: FrameTick,
        pointer: [f32; 2],
    ) -> Option<FrameState> {
        let LoopState::Running {
            pending,
            started_at,
            last_elapsed,
        } = self.state
        else {
            return None;
        };
        if tick.id != pending {
            tracing::trace!(id = ?tick.id, ?pending, "Ignoring stale frame tick");
            return None;
        }

        let elapsed = next_elapsed(tick.timestamp - started_at, last_elapsed);
        let next = host.request_frame();
        self.state = LoopState::Running {
            pending: next,
            started_at,
            last_elapsed: Some(elapsed),
        };

        let time = elapsed as f32;
        let (rotation_y, rotation_z) = self.rotation.angles(time);
        Some(FrameState {
            time,
            pointer,
            rotation_y,
            rotation_z,
        })
    }
}

/// Elapsed time that never goes backwards or repeats.
fn next_elapsed(raw: f64, last: Option<f64>) -> f64 {
    let raw = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
    match last {
        Some(prev) if raw <= prev => prev + MIN_FRAME_STEP,
        _ => raw,
    }
}
