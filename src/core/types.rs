//! Core data types for the route overlay

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic coordinate in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// One continuous stretch of a route, in traversal order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoSection {
    pub points: Vec<GeoPoint>,
}

impl GeoSection {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeoPoint> {
        self.points.iter()
    }
}

impl FromIterator<GeoPoint> for GeoSection {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

/// Ordered route sections plus an optional destination.
///
/// The reference point of a plan is the first point of its first section.
/// A plan whose first section is empty has no reference point and draws
/// nothing, even when later sections carry points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub sections: Vec<GeoSection>,
    #[serde(default)]
    pub destination: Option<GeoPoint>,
}

impl RoutePlan {
    pub fn new(sections: Vec<GeoSection>) -> Self {
        Self { sections, destination: None }
    }

    pub fn with_destination(mut self, destination: GeoPoint) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Build a single-section plan from a directions result.
    ///
    /// The user's location, when known, becomes the first point so the
    /// route starts where the camera is.
    pub fn from_directions(origin: Option<GeoPoint>, destination: GeoPoint, section: GeoSection) -> Self {
        let mut points = Vec::with_capacity(section.len() + 1);
        points.extend(origin);
        points.extend(section.points);

        Self {
            sections: vec![GeoSection::new(points)],
            destination: Some(destination),
        }
    }

    pub fn reference_point(&self) -> Option<GeoPoint> {
        self.sections.first().and_then(|section| section.first()).copied()
    }

    pub fn point_count(&self) -> usize {
        self.sections.iter().map(GeoSection::len).sum()
    }
}

/// Position in the local rendering frame. The reference point sits at the
/// origin, -Z points north and `y` is always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl LocalPoint {
    pub const ORIGIN: LocalPoint = LocalPoint { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vector3(&self) -> Vector3<f32> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn distance_to(&self, other: &LocalPoint) -> f32 {
        (other.to_vector3() - self.to_vector3()).norm()
    }
}

impl From<Vector3<f32>> for LocalPoint {
    fn from(v: Vector3<f32>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }
}

impl fmt::Display for LocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// Orientation of a directional marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Away from the viewer, along -Z
    Towards,
    /// Along +Z
    Backwards,
    /// Along -X
    Left,
    /// Along +X
    Right,
}

impl Direction {
    /// Rotation about +Y that turns a -Z facing arrow to this direction
    pub fn yaw_radians(&self) -> f32 {
        use std::f32::consts::{FRAC_PI_2, PI};
        match self {
            Direction::Towards => 0.0,
            Direction::Left => FRAC_PI_2,
            Direction::Backwards => PI,
            Direction::Right => -FRAC_PI_2,
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Towards => Direction::Backwards,
            Direction::Backwards => Direction::Towards,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Towards => "towards",
            Direction::Backwards => "backwards",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// One drawable unit: an arrow plus the path joining `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: LocalPoint,
    pub to: LocalPoint,
    pub direction: Direction,
    /// Starts at 1 and keeps counting across sections
    pub sequence_index: u32,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.from.distance_to(&self.to)
    }

    pub fn midpoint(&self) -> LocalPoint {
        ((self.from.to_vector3() + self.to.to_vector3()) * 0.5).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_point_is_first_point_of_first_section() {
        let plan = RoutePlan::new(vec![
            GeoSection::new(vec![GeoPoint::new(1.0, 2.0), GeoPoint::new(3.0, 4.0)]),
            GeoSection::new(vec![GeoPoint::new(5.0, 6.0)]),
        ]);
        assert_eq!(plan.reference_point(), Some(GeoPoint::new(1.0, 2.0)));
        assert_eq!(plan.point_count(), 3);

        let empty_first = RoutePlan::new(vec![GeoSection::default(), GeoSection::new(vec![GeoPoint::new(5.0, 6.0)])]);
        assert_eq!(empty_first.reference_point(), None);
    }

    #[test]
    fn test_from_directions_prepends_origin() {
        let section: GeoSection = [(1.0, 1.0), (1.1, 1.1)].into_iter().map(GeoPoint::from).collect();
        let plan = RoutePlan::from_directions(Some(GeoPoint::new(0.9, 0.9)), GeoPoint::new(1.2, 1.2), section.clone());

        assert_eq!(plan.sections.len(), 1);
        assert_eq!(plan.sections[0].len(), 3);
        assert_eq!(plan.reference_point(), Some(GeoPoint::new(0.9, 0.9)));
        assert_eq!(plan.destination, Some(GeoPoint::new(1.2, 1.2)));

        let no_origin = RoutePlan::from_directions(None, GeoPoint::new(1.2, 1.2), section);
        assert_eq!(no_origin.sections[0].len(), 2);
    }

    #[test]
    fn test_direction_yaw_and_opposites() {
        use std::f32::consts::PI;

        assert_eq!(Direction::Towards.yaw_radians(), 0.0);
        assert_eq!(Direction::Backwards.yaw_radians(), PI);
        assert_eq!(Direction::Left.yaw_radians(), -Direction::Right.yaw_radians());

        for direction in [Direction::Towards, Direction::Backwards, Direction::Left, Direction::Right] {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    #[test]
    fn test_segment_geometry() {
        let segment = Segment {
            from: LocalPoint::new(0.0, 0.0, 0.0),
            to: LocalPoint::new(3.0, 0.0, -4.0),
            direction: Direction::Towards,
            sequence_index: 1,
        };
        assert_eq!(segment.length(), 5.0);
        assert_eq!(segment.midpoint(), LocalPoint::new(1.5, 0.0, -2.0));
    }

    #[test]
    fn test_route_plan_json_shape() {
        let json = r#"{ "sections": [[{ "latitude": 1.0, "longitude": 2.0 }]] }"#;
        let plan: RoutePlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.sections[0].points, vec![GeoPoint::new(1.0, 2.0)]);
        assert!(plan.destination.is_none());
    }

    #[test]
    fn test_direction_json_names() {
        assert_eq!(serde_json::to_string(&Direction::Right).unwrap(), "\"right\"");
        assert_eq!(serde_json::to_string(&Direction::Towards).unwrap(), "\"towards\"");
        let parsed: Direction = serde_json::from_str("\"backwards\"").unwrap();
        assert_eq!(parsed, Direction::Backwards);
    }
}
