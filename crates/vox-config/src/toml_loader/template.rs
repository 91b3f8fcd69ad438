//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Vox Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[visual]
# variant = "blob"        # blob, sphere
# seed = 24301

[visual.blob]
# count = 10000           # 1-200000
# radius = 2.2
# color_a = "#4f46e5"
# color_b = "#3b82f6"
# size_min = 0.5
# size_max = 3.0
# alpha = 0.8             # 0.0-1.0
# point_scale = 200.0

[visual.blob.primary]
# frequency = 0.6
# amplitude = 0.2
# speed = 0.3
# drift = "x"             # x, y, z

[visual.blob.pointer]
# enabled = true
# scale = 4.0
# radius = 1.0
# strength = 0.5
# smoothing = 0.1         # 0.0-1.0, remove to snap

[visual.blob.rotation]
# y_rate = 0.08
# z_rate = 0.05
# z_mode = "oscillate"    # linear, oscillate
# z_amplitude = 0.05

[visual.sphere]
# segments = 128          # 128-1024
# radius = 1.0
# shadow_color = "#5e8c7d"
# core_color = "#e6b566"
# highlight_color = "#f4dc9f"

[visual.sphere.breathe]
# rate = 0.5
# amplitude = 0.05

[visual.sphere.rim]
# color = "#ffe6b3"
# power = 3.0
# strength = 0.8

[render]
# max_pixel_ratio = 2.0   # 0.5-4.0
# clear_color = "#ffffff"
# clear_alpha = 1.0
# vsync = true

[window]
# title = "Vox"
# width = 1280
# height = 800
# transparent = false

[logging]
# level = "INFO"          # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
