use crate::constants::*;
use crate::error::{Result, RoutingError};
use serde::Deserialize;
use std::env;

/// Options for one round trip generation. Immutable for the duration of a call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RoundTripParams {
    /// Target total loop length in meters
    pub max_distance: f64,

    /// Waypoints in the loop including the start (which is also repeated at
    /// the end). 2 means one generated waypoint.
    pub round_trip_point_count: usize,

    /// Multiplier on the per-leg baseline `max_distance / round_trip_point_count`
    pub distance_factor: f64,

    /// Seed for the pseudo-random sequence
    pub seed: u64,

    /// Starting bearing in degrees; drawn from the seeded sequence when absent
    pub initial_heading: Option<f64>,

    /// Candidates tried per generated waypoint before giving up
    pub max_retries: usize,
}

impl Default for RoundTripParams {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_ROUND_TRIP_DISTANCE_M,
            round_trip_point_count: Self::points_for_distance(DEFAULT_ROUND_TRIP_DISTANCE_M),
            distance_factor: DEFAULT_DISTANCE_FACTOR,
            seed: DEFAULT_SEED,
            initial_heading: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RoundTripParams {
    /// Defaults for a loop of `max_distance` meters, with the point count
    /// derived from the distance.
    pub fn with_distance(max_distance: f64) -> Self {
        Self {
            max_distance,
            round_trip_point_count: Self::points_for_distance(max_distance),
            ..Self::default()
        }
    }

    /// One extra waypoint per `DISTANCE_PER_EXTRA_POINT_M`, capped at `MAX_ROUND_TRIP_POINTS`.
    pub fn points_for_distance(max_distance: f64) -> usize {
        let extra = if max_distance.is_finite() && max_distance > 0.0 {
            (max_distance / DISTANCE_PER_EXTRA_POINT_M) as usize
        } else {
            0
        };
        (MIN_ROUND_TRIP_POINTS + extra).min(MAX_ROUND_TRIP_POINTS)
    }

    /// Number of waypoints the generator has to place.
    pub fn generated_point_count(&self) -> usize {
        self.round_trip_point_count.saturating_sub(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.round_trip_point_count < MIN_ROUND_TRIP_POINTS
            || self.round_trip_point_count > MAX_ROUND_TRIP_POINTS
        {
            return Err(RoutingError::invalid(format!(
                "round_trip_point_count must be between {} and {}, got {}",
                MIN_ROUND_TRIP_POINTS, MAX_ROUND_TRIP_POINTS, self.round_trip_point_count
            )));
        }
        if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            return Err(RoutingError::invalid(format!(
                "max_distance must be a positive number of meters, got {}",
                self.max_distance
            )));
        }
        if !self.distance_factor.is_finite() || self.distance_factor <= 0.0 {
            return Err(RoutingError::invalid(format!(
                "distance_factor must be positive, got {}",
                self.distance_factor
            )));
        }
        if let Some(heading) = self.initial_heading {
            if !(0.0..=360.0).contains(&heading) {
                return Err(RoutingError::invalid(format!(
                    "initial_heading {} must be in [0, 360]",
                    heading
                )));
            }
        }
        if self.max_retries == 0 {
            return Err(RoutingError::invalid("max_retries must be at least 1"));
        }
        Ok(())
    }

    pub fn from_env() -> std::result::Result<Self, String> {
        let defaults = Self::default();

        let max_distance: f64 = env::var("ROUND_TRIP_DISTANCE")
            .unwrap_or_else(|_| defaults.max_distance.to_string())
            .parse()
            .map_err(|_| "Invalid ROUND_TRIP_DISTANCE")?;

        let round_trip_point_count = match env::var("ROUND_TRIP_POINTS") {
            Ok(raw) => raw.parse().map_err(|_| "Invalid ROUND_TRIP_POINTS")?,
            Err(_) => Self::points_for_distance(max_distance),
        };

        let initial_heading = match env::var("ROUND_TRIP_HEADING") {
            Ok(raw) => Some(raw.parse().map_err(|_| "Invalid ROUND_TRIP_HEADING")?),
            Err(_) => None,
        };

        Ok(Self {
            max_distance,
            round_trip_point_count,
            distance_factor: env::var("ROUND_TRIP_DISTANCE_FACTOR")
                .unwrap_or_else(|_| defaults.distance_factor.to_string())
                .parse()
                .map_err(|_| "Invalid ROUND_TRIP_DISTANCE_FACTOR")?,
            seed: env::var("ROUND_TRIP_SEED")
                .unwrap_or_else(|_| defaults.seed.to_string())
                .parse()
                .map_err(|_| "Invalid ROUND_TRIP_SEED")?,
            initial_heading,
            max_retries: env::var("ROUND_TRIP_MAX_RETRIES")
                .unwrap_or_else(|_| defaults.max_retries.to_string())
                .parse()
                .map_err(|_| "Invalid ROUND_TRIP_MAX_RETRIES")?,
        })
    }
}

/// Settings for the demo binary: where to start and what synthetic grid to
/// snap against.
#[derive(Debug, Clone)]
pub struct Config {
    pub start_lat: f64,
    pub start_lon: f64,
    /// Nodes per grid side. Odd sizes put a node exactly on the start.
    pub grid_size: usize,
    pub grid_spacing_m: f64,
    pub search_radius_m: f64,
    pub round_trip: RoundTripParams,
}

impl Config {
    pub fn from_env() -> std::result::Result<Self, String> {
        dotenv::dotenv().ok();

        let grid_size: usize = env::var("GRID_SIZE")
            .unwrap_or_else(|_| "41".to_string())
            .parse()
            .map_err(|_| "Invalid GRID_SIZE")?;

        if grid_size < 2 {
            return Err("GRID_SIZE must be at least 2".to_string());
        }

        Ok(Config {
            start_lat: env::var("START_LAT")
                .unwrap_or_else(|_| "50.0".to_string())
                .parse()
                .map_err(|_| "Invalid START_LAT")?,
            start_lon: env::var("START_LON")
                .unwrap_or_else(|_| "10.0".to_string())
                .parse()
                .map_err(|_| "Invalid START_LON")?,
            grid_size,
            grid_spacing_m: env::var("GRID_SPACING_M")
                .unwrap_or_else(|_| "250.0".to_string())
                .parse()
                .map_err(|_| "Invalid GRID_SPACING_M")?,
            search_radius_m: env::var("SEARCH_RADIUS_M")
                .unwrap_or_else(|_| DEFAULT_SEARCH_RADIUS_M.to_string())
                .parse()
                .map_err(|_| "Invalid SEARCH_RADIUS_M")?,
            round_trip: RoundTripParams::from_env()?,
        })
    }
}
