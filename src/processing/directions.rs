//! Directions service response parsing
//!
//! Only the overview polyline of the first route is used; the legs, steps and
//! turn instructions of a response are ignored.

use crate::core::{GeoPoint, GeoSection, RoutePlan};
use crate::processing::error::{ParseError, ParseResult};
use crate::processing::polyline::decode_polyline;
use log::{debug, warn};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    overview_polyline: Option<OverviewPolyline>,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}

/// Decode the first route's overview polyline from a response body
pub fn parse_directions_response(json: &str) -> ParseResult<GeoSection> {
    let response: DirectionsResponse = serde_json::from_str(json)
        .map_err(|e| ParseError::MalformedResponse { details: e.to_string() })?;

    let encoded = response
        .routes
        .first()
        .and_then(|route| route.overview_polyline.as_ref())
        .map(|polyline| polyline.points.as_str())
        .filter(|points| !points.is_empty());

    let Some(encoded) = encoded else {
        warn!("directions response carried no route (status {:?})", response.status);
        return Err(ParseError::NoRoute { status: response.status });
    };

    let section = decode_polyline(encoded)?;
    debug!("decoded {} route points from directions response", section.len());
    Ok(section)
}

/// Parse a response and wrap it into a plan ending at `destination`
pub fn route_plan_from_response(
    json: &str,
    origin: Option<GeoPoint>,
    destination: GeoPoint,
) -> ParseResult<RoutePlan> {
    let section = parse_directions_response(json)?;
    Ok(RoutePlan::from_directions(origin, destination, section))
}
