use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, RoutingError};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(RoutingError::invalid(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(RoutingError::invalid(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lon
            )));
        }
        Ok(GeoPoint { lat, lon })
    }

    /// Build a point without range checks. Used for planar math where the
    /// components are not geographic.
    pub fn from_raw(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lon, p.lat)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(p: geo::Point<f64>) -> Self {
        GeoPoint {
            lat: p.y(),
            lon: p.x(),
        }
    }
}
