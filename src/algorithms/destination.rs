//! Destination marker placement

use crate::algorithms::coordinate_mapper::CoordinateMapper;
use crate::core::{LocalPoint, RoutePlan};

/// Local position of the plan's destination.
///
/// `None` when the plan has no destination or no reference point; in that
/// case no marker is drawn.
pub fn place_destination(plan: &RoutePlan, scale: f32) -> Option<LocalPoint> {
    let mapper = CoordinateMapper::for_plan(plan, scale)?;
    place_destination_with(&mapper, plan)
}

/// Place the destination using an existing mapper so that it shares the
/// frame of the rest of the plan.
pub fn place_destination_with(mapper: &CoordinateMapper, plan: &RoutePlan) -> Option<LocalPoint> {
    plan.destination.as_ref().map(|destination| mapper.to_local(destination))
}
