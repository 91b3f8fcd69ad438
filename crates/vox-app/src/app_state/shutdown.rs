//! Graceful shutdown: detach the visual, then drop the window.

use super::core::VoxApp;

impl VoxApp {
    /// Tear everything down.
    ///
    /// The visual is detached while the window still exists so the surface
    /// is released before its window. Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");
        self.unmount();
        self.host = None;
        tracing::info!("Graceful shutdown complete");
    }
}
