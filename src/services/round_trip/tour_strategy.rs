use crate::config::RoundTripParams;
use crate::constants::{DISTANCE_JITTER_FRACTION, HEADING_JITTER_DEGREES, RETRY_DISTANCE_SHRINK};
use crate::geometry::angle::normalize_azimuth;
use crate::util::permutation::permutation;
use crate::util::RandomSource;

/// Where to aim each generated waypoint of a loop.
///
/// The loop is walked as a polygon with one corner per point, start
/// included: every leg turns by `360 / round_trip_point_count` degrees and
/// has the same baseline length, so the closing leg back to the start is as
/// long as the others.
///
/// Heading jitter is stratified. The jitter range is cut into one slice per
/// waypoint after the first, and a seeded permutation decides which waypoint
/// gets which slice, so the offsets spread over the whole range.
#[derive(Debug, Clone)]
pub struct MultiPointTour {
    point_count: usize,
    initial_heading: f64,
    base_leg_distance: f64,
    jitter_order: Vec<usize>,
}

impl MultiPointTour {
    /// Draws the initial heading from `random` unless the caller fixed one.
    pub fn new(params: &RoundTripParams, random: &mut dyn RandomSource) -> Self {
        let initial_heading = match params.initial_heading {
            Some(heading) => normalize_azimuth(heading),
            None => random.next_int(360) as f64,
        };
        let point_count = params.round_trip_point_count.max(2);
        let jitter_order = permutation(point_count - 2, random);

        Self {
            point_count,
            initial_heading,
            base_leg_distance: params.max_distance * params.distance_factor / point_count as f64,
            jitter_order,
        }
    }

    pub fn generated_point_count(&self) -> usize {
        self.point_count - 1
    }

    pub fn initial_heading(&self) -> f64 {
        self.initial_heading
    }

    pub fn base_leg_distance(&self) -> f64 {
        self.base_leg_distance
    }

    /// Degrees the heading turns between consecutive legs.
    pub fn sector_step(&self) -> f64 {
        360.0 / self.point_count as f64
    }

    /// Largest heading offset from a sector's center. Never more than half
    /// a sector, so neighbouring headings keep their order.
    pub fn max_heading_jitter(&self) -> f64 {
        HEADING_JITTER_DEGREES.min(self.sector_step() / 2.0)
    }

    /// Heading for waypoint `iteration` (0-based) on its `attempt`-th try.
    ///
    /// The very first candidate uses the initial heading unchanged. First
    /// tries of later waypoints draw inside their permuted jitter slice;
    /// retries draw anywhere in the jitter range.
    pub fn heading_for_iteration(
        &self,
        iteration: usize,
        attempt: usize,
        random: &mut dyn RandomSource,
    ) -> f64 {
        let sector = self.initial_heading + iteration as f64 * self.sector_step();
        if iteration == 0 && attempt == 0 {
            return normalize_azimuth(sector);
        }

        let draw = random.next_double();
        let spread = match self.jitter_order.get(iteration.wrapping_sub(1)) {
            Some(&slice) if attempt == 0 => (slice as f64 + draw) / self.jitter_order.len() as f64,
            _ => draw,
        };
        normalize_azimuth(sector + (spread * 2.0 - 1.0) * self.max_heading_jitter())
    }

    /// Leg length for the `attempt`-th try. Retries pull the candidate closer
    /// to the previous waypoint.
    pub fn distance_for_iteration(&self, attempt: usize, random: &mut dyn RandomSource) -> f64 {
        let baseline = self.base_leg_distance * RETRY_DISTANCE_SHRINK.powi(attempt as i32);
        slightly_modify_distance(baseline, random)
    }
}

/// Moves `distance` by up to `DISTANCE_JITTER_FRACTION` in either direction.
fn slightly_modify_distance(distance: f64, random: &mut dyn RandomSource) -> f64 {
    let modification = random.next_double() * DISTANCE_JITTER_FRACTION * distance;
    if random.next_bool() {
        distance - modification
    } else {
        distance + modification
    }
}
