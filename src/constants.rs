//! Stable crate-wide constants.
//!
//! Values here are structural limits and the round-trip sampling policy.
//! Per-request knobs (distance, seed, point count, heading, retries) live in
//! [`RoundTripParams`](crate::config::RoundTripParams) instead.

// --- Round trip request defaults ---

/// Default target loop length in meters when none is requested.
pub const DEFAULT_ROUND_TRIP_DISTANCE_M: f64 = 10_000.0;
/// Default seed for the pseudo-random sequence.
pub const DEFAULT_SEED: u64 = 0;
/// Default number of candidates tried per generated waypoint.
pub const DEFAULT_MAX_RETRIES: usize = 3;
/// Default multiplier on the per-leg baseline distance.
pub const DEFAULT_DISTANCE_FACTOR: f64 = 1.0;

// --- Structural limits ---

/// Smallest valid point count: the start plus one generated waypoint.
pub const MIN_ROUND_TRIP_POINTS: usize = 2;
/// Upper bound on waypoints in a single loop, including the start.
pub const MAX_ROUND_TRIP_POINTS: usize = 20;
/// When the point count is derived from a distance, one extra waypoint is
/// added per this many meters of requested loop length.
pub const DISTANCE_PER_EXTRA_POINT_M: f64 = 50_000.0;

// --- Sampling policy ---
// Consumed by `MultiPointTour` to spread waypoints over distinct compass
// sectors while keeping each generation reproducible for a fixed seed.

/// Maximum absolute bearing jitter (degrees). The first candidate of the
/// first waypoint is never jittered.
pub const HEADING_JITTER_DEGREES: f64 = 10.0;
/// Maximum relative change applied to the baseline leg distance (±10%).
pub const DISTANCE_JITTER_FRACTION: f64 = 0.1;
/// Each failed snap shrinks the next candidate's baseline leg by this factor.
pub const RETRY_DISTANCE_SHRINK: f64 = 0.95;

// --- Reference spatial index ---

/// Default search radius (meters) for `LinearNodeIndex`.
pub const DEFAULT_SEARCH_RADIUS_M: f64 = 1_000.0;
