//! Window creation.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use super::core::VoxApp;
use super::window_host::WindowHost;

impl VoxApp {
    /// Create the window and its host.
    /// Returns `false` if the window could not be created.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(window_config.transparent)
            .with_inner_size(LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let host = WindowHost::new(window);
        let size = vox_renderer::Host::container_size(&host);
        tracing::info!(
            width = size.width,
            height = size.height,
            scale = host.window().scale_factor(),
            "Window created"
        );
        self.host = Some(host);
        true
    }
}
