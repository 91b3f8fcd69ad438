//! Visual engine validation (geometry sizes, noise layers, pointer, camera).

use crate::schema::{
    BreatheConfig, CameraConfig, NoiseLayerConfig, PointerConfig, RimConfig, RotationConfig,
    VoxConfig,
};

use super::helpers::{validate_hex, validate_range, validate_range_f64};

/// Validate the point-cloud variant.
pub(crate) fn validate_blob(errors: &mut Vec<String>, config: &VoxConfig) {
    let blob = &config.visual.blob;
    validate_range(errors, "visual.blob.count", blob.count, 1, 200_000);
    validate_range_f64(errors, "visual.blob.radius", blob.radius, 0.01, 100.0);
    validate_hex(errors, "visual.blob.color_a", &blob.color_a);
    validate_hex(errors, "visual.blob.color_b", &blob.color_b);
    validate_range_f64(errors, "visual.blob.size_min", blob.size_min, 0.0, 64.0);
    validate_range_f64(errors, "visual.blob.size_max", blob.size_max, 0.0, 64.0);
    if blob.size_min > blob.size_max {
        errors.push(format!(
            "visual.blob.size_min = {} exceeds visual.blob.size_max = {}",
            blob.size_min, blob.size_max
        ));
    }
    validate_range_f64(errors, "visual.blob.alpha", blob.alpha, 0.0, 1.0);
    validate_range_f64(
        errors,
        "visual.blob.point_scale",
        blob.point_scale,
        1.0,
        2000.0,
    );

    validate_layer(errors, "visual.blob.primary", &blob.primary);
    validate_layer(errors, "visual.blob.secondary", &blob.secondary);
    validate_breathe(errors, "visual.blob.breathe", &blob.breathe);
    validate_pointer(errors, "visual.blob.pointer", &blob.pointer);
    validate_camera(errors, "visual.blob.camera", &blob.camera);
    validate_rim(errors, "visual.blob.rim", &blob.rim);
    validate_rotation(errors, "visual.blob.rotation", &blob.rotation);
}

/// Validate the tessellated-sphere variant.
pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &VoxConfig) {
    let sphere = &config.visual.sphere;
    validate_range(
        errors,
        "visual.sphere.segments",
        sphere.segments,
        128,
        1024,
    );
    validate_range_f64(errors, "visual.sphere.radius", sphere.radius, 0.01, 100.0);
    validate_hex(errors, "visual.sphere.shadow_color", &sphere.shadow_color);
    validate_hex(errors, "visual.sphere.core_color", &sphere.core_color);
    validate_hex(
        errors,
        "visual.sphere.highlight_color",
        &sphere.highlight_color,
    );
    validate_range_f64(errors, "visual.sphere.alpha", sphere.alpha, 0.0, 1.0);

    validate_layer(errors, "visual.sphere.primary", &sphere.primary);
    validate_layer(errors, "visual.sphere.secondary", &sphere.secondary);
    validate_breathe(errors, "visual.sphere.breathe", &sphere.breathe);
    validate_pointer(errors, "visual.sphere.pointer", &sphere.pointer);
    validate_camera(errors, "visual.sphere.camera", &sphere.camera);
    validate_rim(errors, "visual.sphere.rim", &sphere.rim);
    validate_rotation(errors, "visual.sphere.rotation", &sphere.rotation);
}

fn validate_layer(errors: &mut Vec<String>, prefix: &str, layer: &NoiseLayerConfig) {
    validate_range_f64(
        errors,
        &format!("{prefix}.frequency"),
        layer.frequency,
        0.0,
        20.0,
    );
    validate_range_f64(
        errors,
        &format!("{prefix}.amplitude"),
        layer.amplitude,
        0.0,
        5.0,
    );
    validate_range_f64(errors, &format!("{prefix}.speed"), layer.speed, 0.0, 20.0);
}

fn validate_breathe(errors: &mut Vec<String>, prefix: &str, breathe: &BreatheConfig) {
    validate_range_f64(errors, &format!("{prefix}.rate"), breathe.rate, 0.0, 20.0);
    validate_range_f64(
        errors,
        &format!("{prefix}.amplitude"),
        breathe.amplitude,
        0.0,
        5.0,
    );
}

fn validate_pointer(errors: &mut Vec<String>, prefix: &str, pointer: &PointerConfig) {
    validate_range_f64(errors, &format!("{prefix}.scale"), pointer.scale, 0.0, 50.0);
    validate_range_f64(
        errors,
        &format!("{prefix}.radius"),
        pointer.radius,
        0.001,
        50.0,
    );
    validate_range_f64(
        errors,
        &format!("{prefix}.strength"),
        pointer.strength,
        0.0,
        5.0,
    );
    if let Some(k) = pointer.smoothing {
        if !(k > 0.0 && k <= 1.0) {
            errors.push(format!(
                "{prefix}.smoothing = {k} is out of range (0, 1]"
            ));
        }
    }
}

fn validate_camera(errors: &mut Vec<String>, prefix: &str, camera: &CameraConfig) {
    validate_range_f64(
        errors,
        &format!("{prefix}.fov_degrees"),
        camera.fov_degrees,
        1.0,
        170.0,
    );
    validate_range_f64(errors, &format!("{prefix}.scale"), camera.scale, 0.01, 100.0);
    if !camera.position.iter().all(|c| c.is_finite()) {
        errors.push(format!("{prefix}.position must be finite"));
    }
}

fn validate_rim(errors: &mut Vec<String>, prefix: &str, rim: &RimConfig) {
    validate_hex(errors, &format!("{prefix}.color"), &rim.color);
    validate_range_f64(errors, &format!("{prefix}.power"), rim.power, 0.1, 16.0);
    validate_range_f64(
        errors,
        &format!("{prefix}.strength"),
        rim.strength,
        0.0,
        4.0,
    );
}

/// Rates may be negative to spin the other way.
fn validate_rotation(errors: &mut Vec<String>, prefix: &str, rotation: &RotationConfig) {
    validate_range_f64(
        errors,
        &format!("{prefix}.y_rate"),
        rotation.y_rate,
        -10.0,
        10.0,
    );
    validate_range_f64(
        errors,
        &format!("{prefix}.z_rate"),
        rotation.z_rate,
        -10.0,
        10.0,
    );
    validate_range_f64(
        errors,
        &format!("{prefix}.z_amplitude"),
        rotation.z_amplitude,
        0.0,
        std::f64::consts::PI,
    );
}
