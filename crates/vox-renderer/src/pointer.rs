//! Pointer tracking with optional exponential smoothing.

use crate::host::PointerSink;

/// Follows the latest pointer sample recorded by its sink.
#[derive(Debug)]
pub struct PointerTracker {
    sink: PointerSink,
    /// Lerp factor per frame; `None` snaps to the raw sample.
    smoothing: Option<f32>,
    current: [f32; 2],
}

impl PointerTracker {
    pub fn new(smoothing: Option<f32>) -> Self {
        Self {
            sink: PointerSink::new(),
            smoothing: smoothing.map(|k| k.clamp(0.0, 1.0)),
            current: [0.0, 0.0],
        }
    }

    /// A writer handle to register with the host.
    pub fn sink(&self) -> PointerSink {
        self.sink.clone()
    }

    /// The pointer as of the last [`advance`](Self::advance).
    pub fn sample(&self) -> [f32; 2] {
        self.current
    }

    /// Move one frame toward the latest raw sample.
    pub fn advance(&mut self) -> [f32; 2] {
        let target = self.sink.latest().unwrap_or([0.0, 0.0]);
        self.current = match self.smoothing {
            Some(k) => [
                self.current[0] + (target[0] - self.current[0]) * k,
                self.current[1] + (target[1] - self.current[1]) * k,
            ],
            None => target,
        };
        self.current
    }
}
