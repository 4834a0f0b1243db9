//! Route geometry algorithms

pub mod coordinate_mapper;
pub mod direction;
pub mod segment_builder;
pub mod destination;

pub use coordinate_mapper::{map_route_plan, map_to_local, CoordinateMapper, MappedSections};
pub use direction::classify_direction;
pub use segment_builder::{build_segments, SectionContinuity, SegmentBuilder};
pub use destination::{place_destination, place_destination_with};
