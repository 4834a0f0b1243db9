//! Geographic to local frame mapping
//!
//! Route points arrive as latitude/longitude pairs and leave as positions in
//! the local rendering frame:
//! - the first point of the first section is the origin
//! - longitude deltas become +X (east)
//! - latitude deltas become -Z (north is forward)
//! - altitude is not modelled, so Y is always zero
//!
//! Degree deltas are multiplied by a single scaling factor so that the small
//! distances of a walking route become visible movement in the scene. A
//! mapping is only meaningful for one scaling factor; changing it means
//! mapping the whole plan again.

use crate::core::{GeoPoint, GeoSection, LocalPoint, RoutePlan};
use log::debug;

/// Mapped route, one inner vector per section in plan order
pub type MappedSections = Vec<Vec<LocalPoint>>;

/// Map a single coordinate into the frame anchored at `reference`.
///
/// Total over finite inputs and free of hidden state.
pub fn map_to_local(point: &GeoPoint, reference: &GeoPoint, scale: f32) -> LocalPoint {
    let lng_delta = (point.longitude - reference.longitude) as f32 * scale;
    let lat_delta = (point.latitude - reference.latitude) as f32 * scale;

    LocalPoint {
        x: lng_delta,
        y: 0.0,
        z: -1.0 * lat_delta,
    }
}

/// Map every point of a plan against the plan's reference point.
///
/// Returns an empty result when the plan has no sections or its first
/// section is empty.
pub fn map_route_plan(plan: &RoutePlan, scale: f32) -> MappedSections {
    match CoordinateMapper::for_plan(plan, scale) {
        Some(mapper) => mapper.map_sections(&plan.sections),
        None => {
            debug!("route plan has no reference point, nothing to map");
            Vec::new()
        }
    }
}

/// Mapper bound to one reference point and one scaling factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    reference: GeoPoint,
    scale: f32,
}

impl CoordinateMapper {
    pub fn new(reference: GeoPoint, scale: f32) -> Self {
        Self { reference, scale }
    }

    /// Anchor a mapper at the plan's reference point, if it has one
    pub fn for_plan(plan: &RoutePlan, scale: f32) -> Option<Self> {
        plan.reference_point().map(|reference| Self::new(reference, scale))
    }

    pub fn reference(&self) -> &GeoPoint {
        &self.reference
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_local(&self, point: &GeoPoint) -> LocalPoint {
        map_to_local(point, &self.reference, self.scale)
    }

    pub fn map_section(&self, section: &GeoSection) -> Vec<LocalPoint> {
        section.iter().map(|point| self.to_local(point)).collect()
    }

    pub fn map_sections(&self, sections: &[GeoSection]) -> MappedSections {
        let mapped: MappedSections = sections.iter().map(|section| self.map_section(section)).collect();
        debug!(
            "mapped {} sections against reference {} at scale {}",
            mapped.len(),
            self.reference,
            self.scale
        );
        mapped
    }
}
