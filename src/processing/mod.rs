//! Route ingestion from directions providers

pub mod error;
pub mod polyline;
pub mod directions;

pub use error::{ParseError, ParseResult};
pub use polyline::{decode_polyline, encode_polyline};
pub use directions::{parse_directions_response, route_plan_from_response};
