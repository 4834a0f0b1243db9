//! Encoded polyline decoding
//!
//! Directions services ship route geometry as an encoded polyline string:
//! each coordinate is stored as a latitude delta followed by a longitude
//! delta from the previous point, at five decimal places. Every delta is
//! zig-zag encoded and split into 5-bit chunks, least significant first,
//! with 0x20 marking a continuation and 63 added to keep the byte printable.

use crate::core::{GeoPoint, GeoSection};
use crate::processing::error::{ParseError, ParseResult};
use crate::validation::CoordinateValidator;

/// Precision of the standard polyline encoding
const POLYLINE_PRECISION: f64 = 1e5;

const CHUNK_OFFSET: u8 = 63;
const CHUNK_MASK: i64 = 0x1f;
const CONTINUATION_BIT: i64 = 0x20;

/// Largest shift that still fits a 32-bit delta
const MAX_SHIFT: u32 = 30;

/// Decode a polyline string into a route section
pub fn decode_polyline(encoded: &str) -> ParseResult<GeoSection> {
    let bytes = encoded.as_bytes();
    let mut offset = 0;
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut points = Vec::new();

    while offset < bytes.len() {
        lat += decode_value(bytes, &mut offset)?;
        if offset >= bytes.len() {
            return Err(ParseError::Truncated { offset });
        }
        lng += decode_value(bytes, &mut offset)?;

        points.push(GeoPoint::new(
            lat as f64 / POLYLINE_PRECISION,
            lng as f64 / POLYLINE_PRECISION,
        ));
    }

    Ok(GeoSection::new(points))
}

/// Encode a section with the same scheme, mainly for fixtures.
///
/// Points must be finite WGS84 coordinates; anything else is rejected
/// before encoding starts.
pub fn encode_polyline(section: &GeoSection) -> ParseResult<String> {
    for (index, point) in section.iter().enumerate() {
        CoordinateValidator::validate_geo(point)
            .map_err(|source| ParseError::InvalidCoordinate { index, source })?;
    }

    let mut encoded = String::new();
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for point in section.iter() {
        let lat = (point.latitude * POLYLINE_PRECISION).round() as i64;
        let lng = (point.longitude * POLYLINE_PRECISION).round() as i64;
        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lng - prev_lng, &mut encoded);
        prev_lat = lat;
        prev_lng = lng;
    }

    Ok(encoded)
}

fn decode_value(bytes: &[u8], offset: &mut usize) -> ParseResult<i64> {
    let mut result = 0i64;
    let mut shift = 0u32;

    loop {
        let byte = *bytes.get(*offset).ok_or(ParseError::Truncated { offset: *offset })?;
        if !(CHUNK_OFFSET..=126).contains(&byte) {
            return Err(ParseError::InvalidCharacter { character: byte as char, offset: *offset });
        }
        if shift > MAX_SHIFT {
            return Err(ParseError::ValueOverflow { offset: *offset });
        }

        let chunk = (byte - CHUNK_OFFSET) as i64;
        result |= (chunk & CHUNK_MASK) << shift;
        shift += 5;
        *offset += 1;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}

fn encode_value(value: i64, out: &mut String) {
    let mut zigzag = if value < 0 { !(value << 1) } else { value << 1 };

    while zigzag >= CONTINUATION_BIT {
        let chunk = (CONTINUATION_BIT | (zigzag & CHUNK_MASK)) as u8 + CHUNK_OFFSET;
        out.push(chunk as char);
        zigzag >>= 5;
    }
    out.push((zigzag as u8 + CHUNK_OFFSET) as char);
}
