//! Geographic input validation
//!
//! The mapping core accepts any finite input. These checks run where route
//! data enters the crate (files, provider responses) so that bad input is
//! reported instead of silently drawn.

use crate::core::{GeoPoint, RoutePlan};
use serde::Serialize;
use thiserror::Error;

/// Coordinate problems found in route input
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ValidationError {
    #[error("coordinate {field} is not finite")]
    NotFinite { field: &'static str },
    #[error("latitude {value} outside [-90, 90]")]
    LatitudeOutOfRange { value: f64 },
    #[error("longitude {value} outside [-180, 180]")]
    LongitudeOutOfRange { value: f64 },
    #[error("section {section}, point {index}: {source}")]
    InvalidRoutePoint {
        section: usize,
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
    #[error("destination: {source}")]
    InvalidDestination {
        #[source]
        source: Box<ValidationError>,
    },
}

/// Outcome of validating a whole plan
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn into_result(self) -> Result<Vec<String>, ValidationError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.warnings),
        }
    }
}

pub struct CoordinateValidator;

impl CoordinateValidator {
    /// Check a single WGS84 coordinate
    pub fn validate_geo(point: &GeoPoint) -> Result<(), ValidationError> {
        if !point.latitude.is_finite() {
            return Err(ValidationError::NotFinite { field: "latitude" });
        }
        if !point.longitude.is_finite() {
            return Err(ValidationError::NotFinite { field: "longitude" });
        }
        if !(-90.0..=90.0).contains(&point.latitude) {
            return Err(ValidationError::LatitudeOutOfRange { value: point.latitude });
        }
        if !(-180.0..=180.0).contains(&point.longitude) {
            return Err(ValidationError::LongitudeOutOfRange { value: point.longitude });
        }
        Ok(())
    }

    /// Check every point and the destination of a plan
    pub fn validate_plan(plan: &RoutePlan) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        for (section_idx, section) in plan.sections.iter().enumerate() {
            if section.is_empty() {
                if section_idx == 0 {
                    warnings.push("first section is empty; the route has no reference point".to_string());
                } else {
                    warnings.push(format!("section {} is empty", section_idx));
                }
            }

            for (point_idx, point) in section.iter().enumerate() {
                if let Err(e) = Self::validate_geo(point) {
                    errors.push(ValidationError::InvalidRoutePoint {
                        section: section_idx,
                        index: point_idx,
                        source: Box::new(e),
                    });
                }
            }
        }

        if plan.sections.is_empty() {
            warnings.push("route has no sections".to_string());
        }

        match &plan.destination {
            Some(destination) => {
                if let Err(e) = Self::validate_geo(destination) {
                    errors.push(ValidationError::InvalidDestination { source: Box::new(e) });
                }
            }
            None => warnings.push("no destination set; no marker will be placed".to_string()),
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
