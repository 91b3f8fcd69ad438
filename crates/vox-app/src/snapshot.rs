//! `vox snapshot`: render one frame offscreen and save it as PNG.

use std::path::PathBuf;

use vox_common::VoxError;
use vox_config::VoxConfig;
use vox_renderer::animation::FrameTick;
use vox_renderer::gpu::MAX_SURFACE_DIMENSION;
use vox_renderer::{HeadlessHost, LifecycleBinder, VariantProfile, WgpuBackend};

use crate::cli::SnapshotArgs;

/// Reject arguments that cannot produce an image.
pub fn validate(args: &SnapshotArgs) -> vox_common::Result<()> {
    if args.width == 0 || args.height == 0 {
        return Err(VoxError::Snapshot(format!(
            "image size must be non-zero, got {}x{}",
            args.width, args.height
        )));
    }
    if args.width > MAX_SURFACE_DIMENSION || args.height > MAX_SURFACE_DIMENSION {
        return Err(VoxError::Snapshot(format!(
            "image size {}x{} exceeds {MAX_SURFACE_DIMENSION} pixels per side",
            args.width, args.height
        )));
    }
    if !args.time.is_finite() || args.time < 0.0 {
        return Err(VoxError::Snapshot(format!(
            "time must be a non-negative number of seconds, got {}",
            args.time
        )));
    }
    Ok(())
}

/// Mount `args.variant` into a headless host, deliver one frame at
/// `args.time` seconds after mount and write it to `args.out`.
pub fn render(config: &VoxConfig, args: &SnapshotArgs) -> vox_common::Result<PathBuf> {
    validate(args)?;

    let mut host = HeadlessHost::new(args.width, args.height);
    let profile = VariantProfile::from_config(config, args.variant);
    let mut binder = LifecycleBinder::new(profile, WgpuBackend::new());
    binder
        .attach(&mut host, 0.0)
        .map_err(VoxError::visual)?;

    let image = draw_and_capture(&mut binder, &mut host, args.time);
    binder.detach(&mut host);
    let image = image?;

    image.save(&args.out).map_err(|e| VoxError::Write {
        path: args.out.clone(),
        source: e.into(),
    })?;

    tracing::info!(
        path = %args.out.display(),
        width = image.width(),
        height = image.height(),
        "Snapshot written"
    );
    Ok(args.out.clone())
}

fn draw_and_capture(
    binder: &mut LifecycleBinder<WgpuBackend>,
    host: &mut HeadlessHost,
    time: f64,
) -> vox_common::Result<image::RgbaImage> {
    let Some(id) = host.take_frame_requests().into_iter().next() else {
        return Err(VoxError::Snapshot("no frame was requested".into()));
    };
    let drew = binder
        .on_frame(host, FrameTick { id, timestamp: time })
        .map_err(VoxError::visual)?;
    if !drew {
        return Err(VoxError::Snapshot("frame was not drawn".into()));
    }
    binder.capture().map_err(VoxError::visual)
}
