//! Arrow orientation from two consecutive local points

use crate::core::{Direction, LocalPoint};

/// Pick one of four orientations for the step `from -> to`.
///
/// The dominant horizontal axis decides. When both deltas have the same
/// magnitude the Z axis wins, and a zero-length step points `Towards`.
pub fn classify_direction(from: &LocalPoint, to: &LocalPoint) -> Direction {
    let x_delta = to.x - from.x;
    let z_delta = to.z - from.z;

    if x_delta == 0.0 && z_delta == 0.0 {
        return Direction::Towards;
    }

    if x_delta.abs() > z_delta.abs() {
        if x_delta > 0.0 { Direction::Right } else { Direction::Left }
    } else if z_delta > 0.0 {
        Direction::Backwards
    } else {
        // -Z is forward
        Direction::Towards
    }
}
