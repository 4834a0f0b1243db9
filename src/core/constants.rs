//! Overlay constants

/// Multiplier applied to degree deltas before they become local units
pub const DEFAULT_SCALING_FACTOR: f32 = 100_000.0;

/// Width and height of the destination marker in local units
pub const DESTINATION_MARKER_SIZE: f32 = 10.0;

/// Index given to the first emitted segment
pub const FIRST_SEQUENCE_INDEX: u32 = 1;
