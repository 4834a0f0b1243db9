//! Core types and constants for the route overlay

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
