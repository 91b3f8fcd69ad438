//! Render surface configuration.

use serde::{Deserialize, Serialize};

/// Render surface settings shared by both variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Upper bound for the device pixel ratio (valid range: 0.5-4.0).
    pub max_pixel_ratio: f64,
    /// Clear color behind the visual (`#RRGGBB`).
    pub clear_color: String,
    /// Clear alpha (0.0 = fully transparent background).
    pub clear_alpha: f64,
    /// Wait for vertical blank when presenting to a window.
    pub vsync: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_pixel_ratio: 2.0,
            clear_color: "#ffffff".into(),
            clear_alpha: 1.0,
            vsync: true,
        }
    }
}
