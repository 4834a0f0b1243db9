//! End-to-end checks through the public API

use approx::assert_abs_diff_eq;
use ar_route_overlay::{
    build_segments, classify_direction, map_route_plan, map_to_local, place_destination, Direction,
    GeoPoint, GeoSection, LocalPoint, OverlayConfig, OverlaySession, Primitive, RoutePlan, SceneBuilder,
    DEFAULT_SCALING_FACTOR,
};

fn bangalore_plan() -> RoutePlan {
    RoutePlan::new(vec![GeoSection::new(vec![
        GeoPoint::new(12.97, 77.59),
        GeoPoint::new(12.971, 77.591),
    ])])
    .with_destination(GeoPoint::new(12.9715, 77.5915))
}

#[test]
fn test_bangalore_walkthrough() {
    let plan = bangalore_plan();
    assert_eq!(plan.reference_point(), Some(GeoPoint::new(12.97, 77.59)));

    let mapped = map_route_plan(&plan, DEFAULT_SCALING_FACTOR);
    assert_eq!(mapped.len(), 1);
    assert_eq!(mapped[0][0], LocalPoint::ORIGIN);
    assert_abs_diff_eq!(mapped[0][1].x, 100.0, epsilon = 0.01);
    assert_abs_diff_eq!(mapped[0][1].y, 0.0);
    assert_abs_diff_eq!(mapped[0][1].z, -100.0, epsilon = 0.01);

    let destination = place_destination(&plan, DEFAULT_SCALING_FACTOR).unwrap();
    assert_abs_diff_eq!(destination.x, 150.0, epsilon = 0.01);
    assert_abs_diff_eq!(destination.z, -150.0, epsilon = 0.01);

    // The reference point itself yields a zero-length first segment
    let segments = build_segments(&mapped);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].direction, Direction::Towards);
    assert_eq!(segments[1].from, LocalPoint::ORIGIN);
    assert_eq!(segments[1].sequence_index, 2);

    // A diagonal step ties on magnitude and is classified by z
    let diagonal = classify_direction(&LocalPoint::ORIGIN, &LocalPoint::new(100.0, 0.0, -100.0));
    assert_eq!(diagonal, Direction::Towards);
}

#[test]
fn test_direction_examples() {
    let origin = LocalPoint::ORIGIN;
    assert_eq!(classify_direction(&origin, &origin), Direction::Towards);
    assert_eq!(classify_direction(&origin, &LocalPoint::new(5.0, 0.0, 3.0)), Direction::Right);
    assert_eq!(classify_direction(&origin, &LocalPoint::new(3.0, 0.0, 5.0)), Direction::Backwards);
}

#[test]
fn test_self_reference_is_origin_for_any_scale() {
    let points = [GeoPoint::new(0.0, 0.0), GeoPoint::new(-33.86, 151.2), GeoPoint::new(64.1, -21.9)];
    for point in points {
        for scale in [1.0, 3.5, DEFAULT_SCALING_FACTOR] {
            assert_eq!(map_to_local(&point, &point, scale), LocalPoint::ORIGIN);
        }
    }
}

#[test]
fn test_multi_section_continuity() {
    let p1 = LocalPoint::new(1.0, 0.0, -1.0);
    let p2 = LocalPoint::new(2.0, 0.0, -4.0);
    let p3 = LocalPoint::new(6.0, 0.0, -5.0);

    let segments = build_segments(&[vec![p1, p2], vec![p3]]);

    let indices: Vec<u32> = segments.iter().map(|s| s.sequence_index).collect();
    assert_eq!(indices, vec![1, 2, 3]);
    assert_eq!(segments[2].from, p2);
    assert_eq!(segments[2].to, p3);
}

#[test]
fn test_no_reference_means_nothing_to_draw() {
    let plan = RoutePlan::new(vec![GeoSection::default(), GeoSection::new(vec![GeoPoint::new(1.0, 1.0)])])
        .with_destination(GeoPoint::new(1.0, 1.001));

    assert!(map_route_plan(&plan, DEFAULT_SCALING_FACTOR).is_empty());
    assert!(place_destination(&plan, DEFAULT_SCALING_FACTOR).is_none());
    assert!(SceneBuilder::new(OverlayConfig::default()).build(&plan).is_empty());
}

#[test]
fn test_session_scene_from_json_route() {
    let json = r#"{
        "sections": [
            [ { "latitude": 12.97, "longitude": 77.59 }, { "latitude": 12.971, "longitude": 77.591 } ]
        ],
        "destination": { "latitude": 12.9715, "longitude": 77.5915 }
    }"#;
    let plan: RoutePlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan, bangalore_plan());

    let mut session = OverlaySession::new(OverlayConfig::default()).unwrap();
    let scene = session.set_route(plan).unwrap();

    let arrows = scene.primitives.iter().filter(|p| matches!(p, Primitive::Arrow { .. })).count();
    let paths = scene.primitives.iter().filter(|p| matches!(p, Primitive::Path { .. })).count();
    assert_eq!(arrows, 2);
    assert_eq!(paths, 2);
    assert!(matches!(scene.primitives.last(), Some(Primitive::DestinationMarker { .. })));
}
