//! Render surface and window validation.

use crate::schema::VoxConfig;

use super::helpers::{validate_hex, validate_range, validate_range_f64};

pub(crate) fn validate_render(errors: &mut Vec<String>, config: &VoxConfig) {
    let render = &config.render;
    validate_range_f64(
        errors,
        "render.max_pixel_ratio",
        render.max_pixel_ratio,
        0.5,
        4.0,
    );
    validate_hex(errors, "render.clear_color", &render.clear_color);
    validate_range_f64(errors, "render.clear_alpha", render.clear_alpha, 0.0, 1.0);
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &VoxConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 16384);
    validate_range(errors, "window.height", config.window.height, 64, 16384);
}
