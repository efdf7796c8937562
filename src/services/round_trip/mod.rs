mod tour_strategy;

pub use tour_strategy::MultiPointTour;

use tracing::{debug, info, instrument, warn};

use crate::config::RoundTripParams;
use crate::error::{Result, RoutingError};
use crate::geometry::EarthCalc;
use crate::models::{GeoPoint, Snap, WaypointSequence};
use crate::services::spatial_index::{EdgeFilter, SpatialIndex};
use crate::util::{RandomSource, SeededRandom};

/// Picks the waypoints of a loop that starts and ends at one location.
///
/// The generator only aims and snaps: it fans candidate points out around
/// the start, matches each against the road graph through the spatial index,
/// and hands back the matched snaps. Routing between them is someone else's
/// job. It keeps no state between calls, so one instance can serve any number
/// of threads as long as the index can.
#[derive(Debug, Clone)]
pub struct RoundTripGenerator<I> {
    index: I,
}

impl<I: SpatialIndex> RoundTripGenerator<I> {
    pub fn new(index: I) -> Self {
        RoundTripGenerator { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Round trip for a request carrying a point list. Exactly one point, the
    /// start, is accepted.
    pub fn lookup(
        &self,
        points: &[GeoPoint],
        filter: &dyn EdgeFilter,
        params: &RoundTripParams,
    ) -> Result<WaypointSequence> {
        match points {
            [start] => self.generate(*start, filter, params),
            _ => Err(RoutingError::invalid(format!(
                "For round trip calculation exactly one point is required, got {}",
                points.len()
            ))),
        }
    }

    /// Generates a loop using a random sequence seeded from `params.seed`.
    /// Equal inputs over an unchanged index give equal results.
    pub fn generate(
        &self,
        start: GeoPoint,
        filter: &dyn EdgeFilter,
        params: &RoundTripParams,
    ) -> Result<WaypointSequence> {
        let mut random = SeededRandom::new(params.seed);
        self.generate_with_random(start, filter, params, &mut random)
    }

    /// Like [`generate`](Self::generate) but draws from the caller's random source.
    ///
    /// Returns `[start, w1, .., wn, start]` where `n` is
    /// `round_trip_point_count - 1`. Parameters are checked before the index
    /// is queried.
    #[instrument(
        skip(self, filter, params, random),
        fields(points = params.round_trip_point_count, distance = params.max_distance)
    )]
    pub fn generate_with_random(
        &self,
        start: GeoPoint,
        filter: &dyn EdgeFilter,
        params: &RoundTripParams,
        random: &mut dyn RandomSource,
    ) -> Result<WaypointSequence> {
        params.validate()?;
        if !start.is_valid() {
            return Err(RoutingError::invalid(format!(
                "Start point {} is outside the valid coordinate range",
                start
            )));
        }

        let start_snap = self.index.find_closest(start.lat, start.lon, filter);
        if !start_snap.is_valid() {
            warn!("Start point {} could not be snapped to the graph", start);
            return Err(RoutingError::PointNotFound {
                point_index: 0,
                message: format!("Cannot find point 0: {}", start),
            });
        }

        let tour = MultiPointTour::new(params, random);
        debug!(
            "Tour from {}: initial heading {:.1}, leg {:.1}m, {} points to place",
            start,
            tour.initial_heading(),
            tour.base_leg_distance(),
            tour.generated_point_count()
        );

        let mut snaps = Vec::with_capacity(tour.generated_point_count() + 2);
        snaps.push(start_snap.clone());

        // The first leg is measured from where the caller stood, later legs
        // from the previous matched point.
        let mut last = start;
        for iteration in 0..tour.generated_point_count() {
            let snap = self.generate_valid_point(
                &tour,
                iteration,
                last,
                filter,
                params.max_retries,
                random,
            )?;
            if let Some(point) = snap.snapped_point() {
                last = point;
            }
            snaps.push(snap);
        }
        snaps.push(start_snap);

        let sequence = WaypointSequence::new(snaps);
        info!(
            "Generated round trip with {} waypoints, straight-line length {}",
            sequence.len(),
            sequence.straight_line_distance()
        );
        Ok(sequence)
    }

    /// Places waypoint `iteration + 1`, retrying with fresh draws and a
    /// shrinking leg until a candidate snaps.
    fn generate_valid_point(
        &self,
        tour: &MultiPointTour,
        iteration: usize,
        from: GeoPoint,
        filter: &dyn EdgeFilter,
        max_retries: usize,
        random: &mut dyn RandomSource,
    ) -> Result<Snap> {
        let point_index = iteration + 1;
        for attempt in 0..max_retries {
            let heading = tour.heading_for_iteration(iteration, attempt, random);
            let distance = tour.distance_for_iteration(attempt, random);
            let candidate = EarthCalc.project_coordinate(from.lat, from.lon, distance, heading);

            let snap = self.index.find_closest(candidate.lat, candidate.lon, filter);
            if snap.is_valid() {
                debug!(
                    "Point {} snapped to node {} ({:.1}m off, heading {:.1}, attempt {})",
                    point_index,
                    snap.closest_node(),
                    snap.query_distance(),
                    heading,
                    attempt + 1
                );
                return Ok(snap);
            }
            warn!(
                "Candidate {} for point {} at heading {:.1}, {:.1}m did not snap",
                candidate,
                point_index,
                heading,
                distance
            );
        }

        Err(RoutingError::PointNotFound {
            point_index,
            message: format!(
                "Could not find a valid point after {} tries, for point {} starting from {}",
                max_retries, point_index, from
            ),
        })
    }
}
