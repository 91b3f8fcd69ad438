//! Frame timing and performance monitoring.

use std::collections::VecDeque;

/// Tracks frame durations from host frame timestamps for FPS calculation.
#[derive(Debug)]
pub struct FrameTimer {
    frame_times: VecDeque<f64>,
    last_timestamp: Option<f64>,
    max_samples: usize,
}

impl FrameTimer {
    /// Create a new frame timer with a default 120-sample rolling window.
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_timestamp: None,
            max_samples: 120,
        }
    }

    /// Record a frame delivered at host time `timestamp` (seconds).
    ///
    /// The first frame only sets the reference point; non-increasing
    /// timestamps are ignored.
    pub fn record(&mut self, timestamp: f64) {
        if let Some(last) = self.last_timestamp {
            let dt = timestamp - last;
            if dt <= 0.0 {
                return;
            }
            self.frame_times.push_back(dt);
            if self.frame_times.len() > self.max_samples {
                self.frame_times.pop_front();
            }
        }
        self.last_timestamp = Some(timestamp);
    }

    /// Forget all samples (used on remount).
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.last_timestamp = None;
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let total: f64 = self.frame_times.iter().sum();
        (total / self.frame_times.len() as f64) * 1000.0
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
