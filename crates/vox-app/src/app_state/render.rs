//! Frame delivery: hand pending frame requests to the mounted visual.

use vox_renderer::animation::FrameTick;

use super::core::VoxApp;

/// Log FPS once per this many drawn frames.
const FPS_LOG_INTERVAL: u64 = 600;

impl VoxApp {
    /// Deliver every outstanding frame request at the current host time.
    pub(super) fn render_frame(&mut self) {
        let timestamp = self.now();
        let (Some(host), Some(binder)) = (self.host.as_mut(), self.binder.as_mut()) else {
            return;
        };

        let mut drew = false;
        for id in host.take_frame_requests() {
            match binder.on_frame(host, FrameTick { id, timestamp }) {
                Ok(true) => {
                    drew = true;
                    self.frames_drawn += 1;
                }
                Ok(false) => {}
                Err(e) => tracing::error!("Render error: {e}"),
            }
        }

        if drew && self.frames_drawn % FPS_LOG_INTERVAL == 0 {
            let timer = binder.frame_timer();
            tracing::debug!(
                fps = format_args!("{:.1}", timer.fps()),
                frame_ms = format_args!("{:.2}", timer.frame_time_ms()),
                "Frame timing"
            );
        }
    }
}
