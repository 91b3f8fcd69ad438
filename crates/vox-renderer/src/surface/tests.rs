use super::*;
use crate::animation::FrameState;
use crate::geometry::{FieldVertex, GeometryField, GeometrySpec};
use crate::gpu::{PhysicalSize, RendererError};
use crate::host::{HeadlessHost, Host, SurfaceSize};
use crate::testing::FakeBackend;

fn field() -> GeometryField {
    GeometryField::build(
        &GeometrySpec::PointCloud {
            count: 10,
            radius: 1.0,
            palette: [[1.0; 3], [0.5; 3]],
            size_range: (1.0, 2.0),
        },
        0,
    )
}

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(effective_pixel_ratio(3.0, 2.0), 2.0);
    assert_eq!(effective_pixel_ratio(1.5, 2.0), 1.5);
    assert_eq!(effective_pixel_ratio(0.0, 2.0), 1.0);
    assert_eq!(effective_pixel_ratio(f64::NAN, 2.0), 1.0);
}

#[test]
fn physical_size_scales_and_rounds() {
    assert_eq!(
        physical_size(SurfaceSize::new(801, 600), 1.5),
        PhysicalSize::new(1202, 900)
    );
}

#[test]
fn initialize_sizes_context_and_appends_one_node() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600).with_pixel_ratio(3.0);
    let mut surface = SurfaceManager::new(backend, SurfaceSettings::default());

    let handle = surface
        .initialize(&mut host, SurfaceSize::new(800, 600), &field())
        .unwrap();
    assert_eq!(handle.pixel_ratio, 2.0);
    assert_eq!(handle.size, PhysicalSize::new(1600, 1200));
    assert_eq!(log.borrow().requested_size, Some(PhysicalSize::new(1600, 1200)));
    assert_eq!(host.child_count(), 1);

    // Second initialize keeps the same surface.
    let again = surface
        .initialize(&mut host, SurfaceSize::new(800, 600), &field())
        .unwrap();
    assert_eq!(again, handle);
    assert_eq!(host.child_count(), 1);
    assert_eq!(log.borrow().created, 1);
}

#[test]
fn failed_initialize_appends_nothing() {
    let mut host = HeadlessHost::new(800, 600);
    let mut surface = SurfaceManager::new(FakeBackend::failing(), SurfaceSettings::default());
    let result = surface.initialize(&mut host, SurfaceSize::new(800, 600), &field());
    assert!(result.is_err());
    assert_eq!(host.child_count(), 0);
    assert!(!surface.is_initialized());
}

#[test]
fn resize_updates_aspect_and_skips_zero() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut surface = SurfaceManager::new(backend, SurfaceSettings::default());
    surface
        .initialize(&mut host, SurfaceSize::new(800, 600), &field())
        .unwrap();

    assert!(surface.resize(SurfaceSize::new(1000, 500), 1.0));
    assert!((surface.camera().unwrap().aspect() - 2.0).abs() < 1e-6);
    assert_eq!(surface.handle().unwrap().size, PhysicalSize::new(1000, 500));

    assert!(!surface.resize(SurfaceSize::new(0, 500), 1.0));
    assert!((surface.camera().unwrap().aspect() - 2.0).abs() < 1e-6);
    assert_eq!(log.borrow().resizes, vec![PhysicalSize::new(1000, 500)]);
}

#[test]
fn initialize_beyond_device_limit_fails_cleanly() {
    let backend = FakeBackend::with_max_dimension(8192);
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(9000, 600);
    let mut surface = SurfaceManager::new(backend, SurfaceSettings::default());

    let err = surface
        .initialize(&mut host, SurfaceSize::new(9000, 600), &field())
        .unwrap_err();
    assert!(matches!(err, RendererError::SurfaceTooLarge { max: 8192, .. }));
    assert_eq!(host.child_count(), 0);
    assert_eq!(log.borrow().created, 0);
    assert!(!surface.is_initialized());
}

#[test]
fn resize_beyond_device_limit_scales_down() {
    let backend = FakeBackend::with_max_dimension(4096);
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut surface = SurfaceManager::new(backend, SurfaceSettings::default());
    surface
        .initialize(&mut host, SurfaceSize::new(800, 600), &field())
        .unwrap();

    assert!(surface.resize(SurfaceSize::new(8000, 2000), 1.0));
    assert_eq!(surface.handle().unwrap().size, PhysicalSize::new(4096, 1024));
    assert_eq!(log.borrow().resizes, vec![PhysicalSize::new(4096, 1024)]);
    assert!((surface.camera().unwrap().aspect() - 4.0).abs() < 1e-6);
}

#[test]
fn resize_follows_pixel_ratio_changes() {
    let mut host = HeadlessHost::new(800, 600);
    let mut surface = SurfaceManager::new(FakeBackend::new(), SurfaceSettings::default());
    surface
        .initialize(&mut host, SurfaceSize::new(800, 600), &field())
        .unwrap();
    assert_eq!(surface.handle().unwrap().pixel_ratio, 1.0);

    // Same logical size on a denser display.
    assert!(surface.resize(SurfaceSize::new(800, 600), 1.5));
    let handle = surface.handle().unwrap();
    assert_eq!(handle.pixel_ratio, 1.5);
    assert_eq!(handle.size, PhysicalSize::new(1200, 900));

    // The cap still applies.
    assert!(surface.resize(SurfaceSize::new(800, 600), 3.0));
    assert_eq!(surface.handle().unwrap().pixel_ratio, 2.0);
}

#[test]
fn render_before_initialize_is_noop() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut surface = SurfaceManager::new(backend, SurfaceSettings::default());
    surface
        .render_frame(&FrameState::default(), &[FieldVertex::default()])
        .unwrap();
    assert_eq!(log.borrow().draws, 0);
    assert!(surface.capture().is_err());
}

#[test]
fn render_frame_uploads_uniforms() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(400, 200).with_pixel_ratio(2.0);
    let settings = SurfaceSettings {
        point_scale: 200.0,
        ..Default::default()
    };
    let mut surface = SurfaceManager::new(backend, settings);
    surface
        .initialize(&mut host, SurfaceSize::new(400, 200), &field())
        .unwrap();
    surface
        .render_frame(&FrameState::default(), &[FieldVertex::default(); 3])
        .unwrap();

    let log = log.borrow();
    let uniforms = log.last_uniforms.unwrap();
    assert_eq!(uniforms.viewport, [800.0, 400.0]);
    assert_eq!(uniforms.pixel_ratio, 2.0);
    assert_eq!(uniforms.point_scale, 200.0);
    assert_eq!(log.last_vertex_count, 3);
}

#[test]
fn dispose_is_idempotent() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut surface = SurfaceManager::new(backend, SurfaceSettings::default());

    surface.dispose(&mut host);
    surface
        .initialize(&mut host, SurfaceSize::new(800, 600), &field())
        .unwrap();
    surface.dispose(&mut host);
    surface.dispose(&mut host);

    assert_eq!(log.borrow().released, 1);
    assert_eq!(host.child_count(), 0);
    assert!(!surface.is_initialized());
}
