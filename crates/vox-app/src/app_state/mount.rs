//! Mounting, remounting and switching the visual inside the window.

use vox_renderer::{LifecycleBinder, VariantProfile, WgpuBackend};

use super::core::VoxApp;

impl VoxApp {
    /// Attach the current variant to the window host.
    ///
    /// Returns `false` when there is no window yet or the visual could not
    /// be attached.
    pub(super) fn mount(&mut self) -> bool {
        let now = self.now();
        let Some(host) = self.host.as_mut() else {
            return false;
        };

        let profile = VariantProfile::from_config(&self.config, self.variant);
        let mut binder = LifecycleBinder::new(profile, WgpuBackend::new());
        match binder.attach(host, now) {
            Ok(()) => {
                self.binder = Some(binder);
                self.frames_drawn = 0;
                true
            }
            Err(e) => {
                tracing::error!(variant = %self.variant, "Failed to attach visual: {e}");
                false
            }
        }
    }

    /// Detach the current visual, if any.
    pub(super) fn unmount(&mut self) {
        if let (Some(binder), Some(host)) = (self.binder.as_mut(), self.host.as_mut()) {
            binder.detach(host);
        }
        self.binder = None;
    }

    /// Detach and attach the same variant, restarting its clock.
    pub(super) fn remount(&mut self) -> bool {
        self.unmount();
        self.mount()
    }

    /// Swap blob and sphere.
    pub(super) fn switch_variant(&mut self) -> bool {
        self.variant = self.variant.toggled();
        tracing::info!(variant = %self.variant, "Switching variant");
        self.remount()
    }
}
