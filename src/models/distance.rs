use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

use crate::error::{Result, RoutingError};

/// Distance in meters
/// Keeps loop lengths and leg lengths from being mixed up with degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
pub struct DistanceMeters(pub f64);

impl DistanceMeters {
    pub fn new(meters: f64) -> Result<Self> {
        if meters < 0.0 {
            return Err(RoutingError::invalid(format!(
                "Distance cannot be negative: {}",
                meters
            )));
        }
        if !meters.is_finite() {
            return Err(RoutingError::invalid("Distance must be a finite number"));
        }
        Ok(DistanceMeters(meters))
    }

    pub fn as_meters(self) -> f64 {
        self.0
    }

    pub fn as_km(self) -> f64 {
        self.0 / 1000.0
    }
}

impl fmt::Display for DistanceMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}m", self.0)
    }
}

impl Add for DistanceMeters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        DistanceMeters(self.0 + other.0)
    }
}

impl Mul<f64> for DistanceMeters {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        DistanceMeters(self.0 * scalar)
    }
}

impl std::iter::Sum for DistanceMeters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DistanceMeters::default(), |acc, d| acc + d)
    }
}
