//! VoxApp struct definition and constructor.

use std::time::Instant;

use vox_config::{Variant, VoxConfig};
use vox_renderer::{LifecycleBinder, WgpuBackend};

use super::window_host::WindowHost;

/// Top-level application state for `vox run`.
pub struct VoxApp {
    pub(super) config: VoxConfig,
    /// Variant mounted (or to be mounted) into the window.
    pub(super) variant: Variant,
    pub(super) host: Option<WindowHost>,
    pub(super) binder: Option<LifecycleBinder<WgpuBackend>>,
    /// Host clock; frame timestamps are seconds since this instant.
    pub(super) clock: Instant,
    pub(super) frames_drawn: u64,
}

impl VoxApp {
    pub fn new(config: VoxConfig, variant: Variant) -> Self {
        Self {
            config,
            variant,
            host: None,
            binder: None,
            clock: Instant::now(),
            frames_drawn: 0,
        }
    }

    pub(super) fn now(&self) -> f64 {
        self.clock.elapsed().as_secs_f64()
    }
}
