//! AR Route Overlay
//!
//! Turns a geographic route (sections of latitude/longitude points and an
//! optional destination) into arrows, path pieces and a destination marker
//! positioned in a local 3D frame for an AR renderer.

pub mod core;
pub mod algorithms;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use self::core::{
    Direction, GeoPoint, GeoSection, LocalPoint, RoutePlan, Segment, DEFAULT_SCALING_FACTOR,
    DESTINATION_MARKER_SIZE,
};
pub use algorithms::{
    build_segments, classify_direction, map_route_plan, map_to_local, place_destination,
    CoordinateMapper, MappedSections, SectionContinuity, SegmentBuilder,
};
pub use processing::{decode_polyline, parse_directions_response, ParseError};
pub use validation::{CoordinateValidator, ValidationError, ValidationReport};
pub use utils::{ConfigError, ConfigurationManager, OverlayConfig};
pub use api::{
    OutputFormat, OverlayError, OverlayResult, OverlaySession, Primitive, SceneBuilder,
    SceneSnapshot, SessionContext, SessionEvent, SessionEventHandler,
};
