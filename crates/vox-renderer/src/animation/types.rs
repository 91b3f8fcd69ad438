use crate::host::FrameRequestId;

/// Snapshot handed to the displacement function for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameState {
    /// Seconds since the loop started.
    pub time: f32,
    /// Smoothed pointer in `[-1, 1]²`.
    pub pointer: [f32; 2],
    pub rotation_y: f32,
    pub rotation_z: f32,
}

/// A display frame delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    pub id: FrameRequestId,
    /// Host clock in seconds.
    pub timestamp: f64,
}

/// How the Z rotation evolves with time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZSpin {
    /// `t · rate`
    Linear,
    /// `sin(t · rate) · amplitude`
    Oscillate { amplitude: f32 },
}

/// Whole-field rotation over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationLaw {
    pub y_rate: f32,
    pub z_rate: f32,
    pub z_spin: ZSpin,
}

impl RotationLaw {
    pub const STILL: RotationLaw = RotationLaw {
        y_rate: 0.0,
        z_rate: 0.0,
        z_spin: ZSpin::Linear,
    };

    /// `(rotation_y, rotation_z)` at time `t`.
    pub fn angles(&self, t: f32) -> (f32, f32) {
        let z = match self.z_spin {
            ZSpin::Linear => t * self.z_rate,
            ZSpin::Oscillate { amplitude } => (t * self.z_rate).sin() * amplitude,
        };
        (t * self.y_rate, z)
    }
}

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopState {
    Idle,
    Running {
        /// The only frame request this loop will accept.
        pending: FrameRequestId,
        /// Host timestamp captured by `start`.
        started_at: f64,
        /// Elapsed time of the last emitted frame.
        last_elapsed: Option<f64>,
    },
}
