//! Route ingestion errors

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors raised while turning provider data into route sections
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Byte outside the printable range used by encoded polylines
    #[error("invalid polyline character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },
    /// Input ended in the middle of a value or coordinate pair
    #[error("polyline truncated at offset {offset}")]
    Truncated { offset: usize },
    /// A single value ran past the width of a coordinate delta
    #[error("polyline value too long at offset {offset}")]
    ValueOverflow { offset: usize },
    /// A point that cannot be written as a polyline
    #[error("point {index} cannot be encoded: {source}")]
    InvalidCoordinate {
        index: usize,
        #[source]
        source: ValidationError,
    },
    /// Response body is not the expected JSON shape
    #[error("malformed directions response: {details}")]
    MalformedResponse { details: String },
    /// The provider returned no usable route
    #[error("no route in directions response (status: {})", .status.as_deref().unwrap_or("unknown"))]
    NoRoute { status: Option<String> },
}

pub type ParseResult<T> = Result<T, ParseError>;
