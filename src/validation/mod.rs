//! Route input validation

pub mod coordinates;

pub use coordinates::{CoordinateValidator, ValidationError, ValidationReport};
