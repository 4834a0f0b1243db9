//! Scene composition
//!
//! Turns a route plan into the flat list of primitives handed to the
//! renderer. A scene is always rebuilt from scratch; once built it is never
//! mutated, so a renderer can keep reading an old snapshot while a new one
//! is being produced.

use crate::algorithms::{place_destination_with, CoordinateMapper, MappedSections, SegmentBuilder};
use crate::core::{Direction, LocalPoint, RoutePlan, Segment};
use crate::utils::config::OverlayConfig;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Drawable unit for the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Arrow {
        from: LocalPoint,
        to: LocalPoint,
        direction: Direction,
        sequence_index: u32,
    },
    Path {
        from: LocalPoint,
        to: LocalPoint,
        sequence_index: u32,
    },
    DestinationMarker {
        position: LocalPoint,
        width: f32,
        height: f32,
    },
}

impl Primitive {
    /// Arrow then path, both spanning the segment
    pub fn for_segment(segment: &Segment) -> [Primitive; 2] {
        [
            Primitive::Arrow {
                from: segment.from,
                to: segment.to,
                direction: segment.direction,
                sequence_index: segment.sequence_index,
            },
            Primitive::Path {
                from: segment.from,
                to: segment.to,
                sequence_index: segment.sequence_index,
            },
        ]
    }
}

/// Immutable result of one full recompute
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub mapped_sections: MappedSections,
    pub segments: Vec<Segment>,
    pub destination: Option<LocalPoint>,
    pub primitives: Vec<Primitive>,
}

impl SceneSnapshot {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Sum of segment lengths in local units
    pub fn route_length(&self) -> f32 {
        self.segments.iter().map(Segment::length).sum()
    }
}

/// Builds scene snapshots for one configuration
#[derive(Debug, Clone)]
pub struct SceneBuilder {
    config: OverlayConfig,
}

impl SceneBuilder {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn build(&self, plan: &RoutePlan) -> SceneSnapshot {
        let Some(mapper) = CoordinateMapper::for_plan(plan, self.config.scaling_factor) else {
            info!("route has no reference point; nothing to draw");
            return SceneSnapshot::default();
        };

        let mapped_sections = mapper.map_sections(&plan.sections);
        let segments = SegmentBuilder::new(self.config.section_continuity).build(&mapped_sections);
        let destination = place_destination_with(&mapper, plan);

        let mut primitives: Vec<Primitive> = segments.iter().flat_map(Primitive::for_segment).collect();
        if let Some(position) = destination {
            primitives.push(Primitive::DestinationMarker {
                position,
                width: self.config.destination_marker_size,
                height: self.config.destination_marker_size,
            });
        }

        debug!(
            "scene built: {} segments, {} primitives, destination {}",
            segments.len(),
            primitives.len(),
            if destination.is_some() { "placed" } else { "absent" }
        );

        SceneSnapshot {
            mapped_sections,
            segments,
            destination,
            primitives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::SectionContinuity;
    use crate::core::{GeoPoint, GeoSection};
    use approx::assert_abs_diff_eq;

    fn sample_plan() -> RoutePlan {
        RoutePlan::new(vec![
            GeoSection::new(vec![GeoPoint::new(12.97, 77.59), GeoPoint::new(12.971, 77.59)]),
            GeoSection::new(vec![GeoPoint::new(12.971, 77.592)]),
        ])
        .with_destination(GeoPoint::new(12.9715, 77.5925))
    }

    #[test]
    fn test_primitive_order() {
        let scene = SceneBuilder::new(OverlayConfig::default()).build(&sample_plan());

        assert_eq!(scene.segments.len(), 3);
        assert_eq!(scene.primitives.len(), 7);

        for (segment, pair) in scene.segments.iter().zip(scene.primitives.chunks(2)) {
            assert_eq!(pair, &Primitive::for_segment(segment));
        }

        match scene.primitives.last() {
            Some(Primitive::DestinationMarker { width, height, .. }) => {
                assert_eq!(*width, 10.0);
                assert_eq!(*height, 10.0);
            }
            other => panic!("expected destination marker, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_plan_builds_empty_scene() {
        let builder = SceneBuilder::new(OverlayConfig::default());
        let plan = RoutePlan::default().with_destination(GeoPoint::new(1.0, 1.0));

        let scene = builder.build(&plan);
        assert!(scene.is_empty());
        assert!(scene.destination.is_none());
        assert!(scene.mapped_sections.is_empty());
    }

    #[test]
    fn test_continuity_setting_is_applied() {
        let config = OverlayConfig {
            section_continuity: SectionContinuity::ResetPerSection,
            ..Default::default()
        };
        let scene = SceneBuilder::new(config).build(&sample_plan());

        assert_eq!(scene.segments[2].from, LocalPoint::ORIGIN);
        assert_eq!(scene.segments[2].sequence_index, 3);
    }

    #[test]
    fn test_route_length() {
        let scene = SceneBuilder::new(OverlayConfig::default()).build(&sample_plan());
        // 0 + 100 north + 200 east
        assert_abs_diff_eq!(scene.route_length(), 300.0, epsilon = 0.05);
    }

    #[test]
    fn test_primitive_json_shape() {
        let segment = Segment {
            from: LocalPoint::ORIGIN,
            to: LocalPoint::new(1.0, 0.0, 0.0),
            direction: crate::core::Direction::Right,
            sequence_index: 1,
        };
        let [arrow, _] = Primitive::for_segment(&segment);

        let value = serde_json::to_value(arrow).unwrap();
        assert_eq!(value["kind"], "arrow");
        assert_eq!(value["direction"], "right");
        assert_eq!(value["sequence_index"], 1);
    }
}
