//! Palette color parsing and validation.
//!
//! Visual palettes are written as `#RRGGBB` or `#RGB` strings and consumed
//! by the renderer as normalized `[f32; 3]` channels in 0.0..=1.0.

mod parse;

#[cfg(test)]
mod tests;

use vox_common::ConfigError;

use parse::{parse_hex, HEX_RE};

/// Parse a color string into normalized RGB channels.
///
/// Accepted formats:
/// - `#RRGGBB` (e.g. `#4f46e5`)
/// - `#RGB` (e.g. `#fff`)
pub fn parse_rgb(s: &str) -> Result<[f32; 3], ConfigError> {
    let s = s.trim();
    if !s.starts_with('#') {
        return Err(ConfigError::ParseError(format!(
            "unrecognized color format: {s}"
        )));
    }
    parse_hex(s).ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")))
}

/// Parse a color, falling back to `fallback` (and logging) when invalid.
pub fn parse_rgb_or(s: &str, fallback: [f32; 3]) -> [f32; 3] {
    match parse_rgb(s) {
        Ok(rgb) => rgb,
        Err(e) => {
            tracing::warn!("{e}, using fallback {fallback:?}");
            fallback
        }
    }
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}
