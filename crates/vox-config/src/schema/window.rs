//! Window configuration for the standalone `vox run` host.

use serde::{Deserialize, Serialize};

/// Window appearance and size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Request a transparent window so the visual floats over the desktop.
    pub transparent: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vox".into(),
            width: 1280,
            height: 800,
            transparent: false,
        }
    }
}
