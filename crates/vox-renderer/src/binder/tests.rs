use super::*;
use crate::host::HeadlessHost;
use crate::gpu::{PhysicalSize, RendererError};
use crate::testing::FakeBackend;
use vox_config::schema::{Variant, VoxConfig};

fn small_config() -> VoxConfig {
    let mut config = VoxConfig::default();
    config.visual.blob.count = 200;
    config
}

fn blob_binder(backend: FakeBackend) -> LifecycleBinder<FakeBackend> {
    LifecycleBinder::new(
        VariantProfile::from_config(&small_config(), Variant::Blob),
        backend,
    )
}

/// Deliver the single outstanding frame request at `timestamp`.
fn pump(
    binder: &mut LifecycleBinder<FakeBackend>,
    host: &mut HeadlessHost,
    timestamp: f64,
) -> bool {
    let ids = host.take_frame_requests();
    assert_eq!(ids.len(), 1);
    binder
        .on_frame(host, FrameTick { id: ids[0], timestamp })
        .unwrap()
}

#[test]
fn attach_mounts_one_surface_and_two_listeners() {
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(FakeBackend::new());
    binder.attach(&mut host, 0.0).unwrap();

    assert!(binder.is_attached());
    assert_eq!(host.child_count(), 1);
    assert_eq!(host.listener_count(), 2);
    assert_eq!(host.pending_frame_count(), 1);
    assert!(matches!(binder.loop_state(), LoopState::Running { .. }));
}

#[test]
fn attach_twice_is_rejected_without_side_effects() {
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(FakeBackend::new());
    binder.attach(&mut host, 0.0).unwrap();

    let err = binder.attach(&mut host, 1.0).unwrap_err();
    assert!(matches!(err, VisualError::AlreadyAttached));
    assert_eq!(host.child_count(), 1);
    assert_eq!(host.listener_count(), 2);
    assert_eq!(host.pending_frame_count(), 1);
}

#[test]
fn failed_initialization_leaves_host_untouched() {
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(FakeBackend::failing());

    let err = binder.attach(&mut host, 0.0).unwrap_err();
    assert!(matches!(err, VisualError::Initialization(_)));
    assert!(!binder.is_attached());
    assert_eq!(host.child_count(), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.pending_frame_count(), 0);
    assert_eq!(binder.loop_state(), LoopState::Idle);
}

#[test]
fn oversized_container_fails_attach_cleanly() {
    let mut host = HeadlessHost::new(9000, 600);
    let mut binder = blob_binder(FakeBackend::new());

    let err = binder.attach(&mut host, 0.0).unwrap_err();
    assert!(matches!(
        err,
        VisualError::Initialization(RendererError::SurfaceTooLarge { width: 9000, .. })
    ));
    assert!(!binder.is_attached());
    assert_eq!(host.child_count(), 0);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.pending_frame_count(), 0);
}

#[test]
fn empty_container_is_an_error() {
    let mut host = HeadlessHost::new(0, 600);
    let mut binder = blob_binder(FakeBackend::new());
    let err = binder.attach(&mut host, 0.0).unwrap_err();
    assert!(matches!(err, VisualError::EmptyContainer { width: 0, .. }));
    assert_eq!(host.child_count(), 0);
}

#[test]
fn detach_is_idempotent() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(backend);

    binder.detach(&mut host);
    binder.attach(&mut host, 0.0).unwrap();
    binder.detach(&mut host);
    binder.detach(&mut host);

    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.child_count(), 0);
    assert_eq!(host.pending_frame_count(), 0);
    assert_eq!(log.borrow().released, 1);
}

#[test]
fn attach_detach_cycles_are_symmetric() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(640, 480);
    let before = host.child_count();
    let mut binder = blob_binder(backend);

    for cycle in 0..3 {
        binder.attach(&mut host, cycle as f64).unwrap();
        assert_eq!(host.child_count(), before + 1);
        pump(&mut binder, &mut host, cycle as f64 + 0.016);
        binder.detach(&mut host);
        assert_eq!(host.child_count(), before);
        assert_eq!(host.listener_count(), 0);
        assert_eq!(binder.loop_state(), LoopState::Idle);
    }
    let log = log.borrow();
    assert_eq!(log.created, 3);
    assert_eq!(log.released, 3);
}

#[test]
fn frames_draw_every_vertex() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(backend);
    binder.attach(&mut host, 10.0).unwrap();

    assert!(pump(&mut binder, &mut host, 10.016));
    assert!(pump(&mut binder, &mut host, 10.032));

    let log = log.borrow();
    assert_eq!(log.draws, 2);
    assert_eq!(log.last_vertex_count, 200);
    assert_eq!(binder.frame_timer().sample_count(), 1);
}

#[test]
fn frames_after_detach_are_ignored() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(backend);
    binder.attach(&mut host, 0.0).unwrap();

    let stale = host.take_frame_requests()[0];
    binder.detach(&mut host);
    let drew = binder
        .on_frame(&mut host, FrameTick { id: stale, timestamp: 0.5 })
        .unwrap();
    assert!(!drew);
    assert_eq!(log.borrow().draws, 0);
}

#[test]
fn stale_tick_from_previous_mount_is_ignored() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(backend);

    binder.attach(&mut host, 0.0).unwrap();
    let old = host.take_frame_requests()[0];
    binder.detach(&mut host);
    binder.attach(&mut host, 1.0).unwrap();

    assert!(!binder
        .on_frame(&mut host, FrameTick { id: old, timestamp: 1.1 })
        .unwrap());
    assert!(pump(&mut binder, &mut host, 1.2));
    assert_eq!(log.borrow().draws, 1);
}

#[test]
fn pending_resize_is_applied_on_next_frame() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(backend);
    binder.attach(&mut host, 0.0).unwrap();

    host.dispatch_resize(1000, 500);
    host.dispatch_resize(0, 0);
    assert!(log.borrow().resizes.is_empty());

    // The last resize wins; an empty container is skipped.
    pump(&mut binder, &mut host, 0.016);
    assert!(log.borrow().resizes.is_empty());

    host.dispatch_resize(1000, 500);
    pump(&mut binder, &mut host, 0.032);
    let camera = binder.surface().camera().unwrap();
    assert!((camera.aspect() - 2.0).abs() < 1e-6);
    assert_eq!(log.borrow().resizes.len(), 1);
}

#[test]
fn pointer_moves_change_displaced_output() {
    let mut config = small_config();
    config.visual.sphere.segments = 128;
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = LifecycleBinder::new(
        VariantProfile::from_config(&config, Variant::Sphere),
        FakeBackend::new(),
    );
    binder.attach(&mut host, 0.0).unwrap();

    pump(&mut binder, &mut host, 0.016);
    let centered = binder.mount.as_ref().unwrap().vertices.clone();

    host.dispatch_pointer(400.0, 300.0);
    pump(&mut binder, &mut host, 0.016);
    let pointer = binder.mount.as_ref().unwrap().pointer.sample();
    assert!(pointer[0].abs() < 1e-6 && pointer[1].abs() < 1e-6);

    host.dispatch_pointer(800.0, 0.0);
    pump(&mut binder, &mut host, 0.016);
    assert_eq!(binder.mount.as_ref().unwrap().pointer.sample(), [1.0, 1.0]);
    let moved = &binder.mount.as_ref().unwrap().vertices;
    assert_eq!(moved.len(), centered.len());
    assert_ne!(moved, &centered);
}

#[test]
fn pixel_ratio_change_is_picked_up_on_resize() {
    let backend = FakeBackend::new();
    let log = backend.log.clone();
    let mut host = HeadlessHost::new(800, 600);
    let mut binder = blob_binder(backend);
    binder.attach(&mut host, 0.0).unwrap();

    host.set_pixel_ratio(2.0);
    host.dispatch_resize(800, 600);
    pump(&mut binder, &mut host, 0.016);

    let handle = binder.surface().handle().unwrap();
    assert_eq!(handle.pixel_ratio, 2.0);
    assert_eq!(log.borrow().resizes, vec![PhysicalSize::new(1600, 1200)]);
    assert_eq!(log.borrow().last_uniforms.unwrap().pixel_ratio, 2.0);
}
