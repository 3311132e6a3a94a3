mod common;

use common::synthetic_points::noisy_floor;
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use surface_anchor::anchor::Anchor;
use surface_anchor::gesture::{GesturePhase, GestureResolver};
use surface_anchor::plane::{RansacParams, SurfaceTracker, TrackerParams};
use surface_anchor::raycast::{PerspectiveCamera, SceneRef};
use surface_anchor::types::{PlacementIntent, PlaneModel, TouchSample, Viewport};

const VIEW_W: f32 = 200.0;
const VIEW_H: f32 = 200.0;

fn overhead_scene(surface: &PlaneModel) -> (PerspectiveCamera, Viewport) {
    let camera = PerspectiveCamera::looking_at(
        Vector3::new(0.0, 5.0, 0.0),
        Vector3::new(0.0, surface.height(), 0.0),
        Vector3::y(),
    );
    (camera, Viewport::new(VIEW_W, VIEW_H))
}

fn touch(id: i32, x: f32, y: f32) -> TouchSample {
    TouchSample::new(id, x, y)
}

#[test]
fn screen_center_tap_places_at_plane_origin() {
    let floor = PlaneModel::horizontal(0.0);
    let (camera, viewport) = overhead_scene(&floor);
    let scene = SceneRef {
        camera: &camera,
        surface: &floor,
        viewport,
    };
    let mut resolver = GestureResolver::default();

    assert!(resolver
        .on_touch_start(&[touch(0, 100.0, 100.0)], &scene)
        .is_none());
    let intent = resolver.on_touch_end(&[], &scene);

    match intent {
        Some(PlacementIntent::PlaceAt(world)) => {
            assert!(
                world.norm() < 1e-4,
                "screen-center tap should land at the plane origin, got {world:?}"
            );
        }
        other => panic!("expected exactly one PlaceAt, got {other:?}"),
    }
    assert_eq!(resolver.phase(), GesturePhase::Idle);
}

#[test]
fn drag_streams_moves_after_crossing_the_threshold() {
    let floor = PlaneModel::horizontal(0.0);
    let (camera, viewport) = overhead_scene(&floor);
    let scene = SceneRef {
        camera: &camera,
        surface: &floor,
        viewport,
    };
    let mut resolver = GestureResolver::default();
    let mut anchor = Anchor::default();

    resolver.on_touch_start(&[touch(0, 100.0, 100.0)], &scene);

    let first = resolver
        .on_touch_move(&[touch(0, 130.0, 100.0)], &scene)
        .expect("30 px displacement must start the drag");
    let PlacementIntent::MoveTo(first_target) = first else {
        panic!("expected MoveTo, got {first:?}");
    };
    anchor.apply(first);
    assert_eq!(resolver.phase(), GesturePhase::Dragging);

    let second = resolver
        .on_touch_move(&[touch(0, 140.0, 100.0)], &scene)
        .expect("every move while dragging emits");
    let PlacementIntent::MoveTo(second_target) = second else {
        panic!("expected MoveTo, got {second:?}");
    };
    anchor.apply(second);

    assert!(
        (second_target - first_target).norm() > 1e-3,
        "drag targets should track the moving finger"
    );
    assert!(resolver.on_touch_end(&[], &scene).is_none());
    assert!(anchor.placed);
    assert_eq!(anchor.position, second_target);
}

#[test]
fn pinch_factors_compound_against_the_previous_span() {
    let floor = PlaneModel::horizontal(0.0);
    let (camera, viewport) = overhead_scene(&floor);
    let scene = SceneRef {
        camera: &camera,
        surface: &floor,
        viewport,
    };
    let mut resolver = GestureResolver::default();
    let mut anchor = Anchor::default();

    // Two fingers land 100 px apart, stretch to 150, then 180.
    resolver.on_touch_start(&[touch(0, 50.0, 100.0), touch(1, 150.0, 100.0)], &scene);
    assert_eq!(resolver.phase(), GesturePhase::Pinching);

    let first = resolver.on_touch_move(&[touch(0, 25.0, 100.0), touch(1, 175.0, 100.0)], &scene);
    assert_eq!(first, Some(PlacementIntent::ScaleBy(1.5)));

    let second = resolver.on_touch_move(&[touch(0, 10.0, 100.0), touch(1, 190.0, 100.0)], &scene);
    // 180 / 150, not 180 / 100.
    assert_eq!(second, Some(PlacementIntent::ScaleBy(1.2)));

    if let Some(intent) = first {
        anchor.apply(intent);
    }
    if let Some(intent) = second {
        anchor.apply(intent);
    }
    assert!(
        (anchor.scale - 1.8).abs() < 1e-6,
        "compounded scale should reach 1.8, got {}",
        anchor.scale
    );

    assert!(resolver.on_touch_end(&[], &scene).is_none());
    assert_eq!(resolver.phase(), GesturePhase::Idle);
}

/// Estimation, adoption, raycast and gesture handling wired the way a host
/// application drives them.
#[test]
fn adopted_plane_carries_tap_placement() {
    let _ = env_logger::builder().is_test(true).try_init();

    let frame = noisy_floor(17, -2.0, 0.2, 50, 10);
    let params = TrackerParams {
        ransac: RansacParams {
            iterations: 200,
            distance_threshold: 1.0,
        },
        min_inliers: 30,
    };
    let mut tracker = SurfaceTracker::new(params, PlaneModel::horizontal(0.0));
    let mut rng = StdRng::seed_from_u64(8);
    tracker
        .update(&frame, &mut rng)
        .expect("dense floor frame should be adopted");

    let surface = *tracker.surface();
    let (camera, viewport) = overhead_scene(&surface);
    let scene = SceneRef {
        camera: &camera,
        surface: &surface,
        viewport,
    };

    let mut resolver = GestureResolver::default();
    let mut anchor = Anchor::default();
    anchor.align_to_surface(&surface);

    resolver.on_touch_start(&[touch(0, 100.0, 100.0)], &scene);
    let intent = resolver
        .on_touch_end(&[], &scene)
        .expect("tap over the adopted plane must place");
    anchor.apply(intent);

    assert!(anchor.placed);
    assert!(
        (anchor.position.y - surface.height()).abs() < 1e-4,
        "placement should land on the adopted surface, got y={:.4}",
        anchor.position.y
    );
}
