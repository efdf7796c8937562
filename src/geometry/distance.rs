use geo::{Destination, Distance, Haversine, InterpolatePoint, Point};

use crate::models::GeoPoint;

/// Distance and interpolation over a particular surface model.
pub trait DistanceCalc {
    /// Distance between two points. Units depend on the implementation.
    fn calc_dist(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64;

    /// Point at `fraction` of the way from point 1 to point 2.
    /// `0.0` yields point 1 and `1.0` yields point 2.
    fn intermediate_point(
        &self,
        fraction: f64,
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    ) -> GeoPoint;

    fn calc_dist_between(&self, from: &GeoPoint, to: &GeoPoint) -> f64 {
        self.calc_dist(from.lat, from.lon, to.lat, to.lon)
    }
}

/// Flat Cartesian plane. Coordinates are treated as plain numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanCalc;

impl EuclideanCalc {
    /// Squared distance; cheaper when only comparing.
    pub fn calc_normalized_dist(&self, from_y: f64, from_x: f64, to_y: f64, to_x: f64) -> f64 {
        let dy = to_y - from_y;
        let dx = to_x - from_x;
        dy * dy + dx * dx
    }

    pub fn calc_dist_3d(
        &self,
        from_y: f64,
        from_x: f64,
        from_z: f64,
        to_y: f64,
        to_x: f64,
        to_z: f64,
    ) -> f64 {
        planar_distance_3d(from_x, from_y, from_z, to_x, to_y, to_z)
    }
}

impl DistanceCalc for EuclideanCalc {
    fn calc_dist(&self, from_y: f64, from_x: f64, to_y: f64, to_x: f64) -> f64 {
        planar_distance(from_x, from_y, to_x, to_y)
    }

    fn intermediate_point(
        &self,
        fraction: f64,
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    ) -> GeoPoint {
        intermediate_point(fraction, lat1, lon1, lat2, lon2)
    }
}

/// Spherical earth, distances in meters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarthCalc;

impl EarthCalc {
    /// Great-circle destination reached by travelling `distance_m` from
    /// `(lat, lon)` on the compass `heading` (degrees, clockwise from north).
    pub fn project_coordinate(
        &self,
        lat: f64,
        lon: f64,
        distance_m: f64,
        heading: f64,
    ) -> GeoPoint {
        let origin = Point::new(lon, lat);
        let projected = Haversine.destination(origin, heading, distance_m);
        GeoPoint::from_raw(projected.y(), wrap_longitude(projected.x()))
    }
}

impl DistanceCalc for EarthCalc {
    fn calc_dist(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        Haversine.distance(Point::new(lon1, lat1), Point::new(lon2, lat2))
    }

    fn intermediate_point(
        &self,
        fraction: f64,
        lat1: f64,
        lon1: f64,
        lat2: f64,
        lon2: f64,
    ) -> GeoPoint {
        if fraction <= 0.0 {
            return GeoPoint::from_raw(lat1, lon1);
        }
        if fraction >= 1.0 {
            return GeoPoint::from_raw(lat2, lon2);
        }
        let point = Haversine.point_at_ratio_between(
            Point::new(lon1, lat1),
            Point::new(lon2, lat2),
            fraction,
        );
        GeoPoint::from_raw(point.y(), point.x())
    }
}

/// Euclidean distance in the plane.
pub fn planar_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean distance over all three axes.
pub fn planar_distance_3d(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let dz = z2 - z1;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Linear interpolation `p1 + fraction * (p2 - p1)`, component-wise.
pub fn intermediate_point(fraction: f64, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> GeoPoint {
    GeoPoint::from_raw(
        lat1 + fraction * (lat2 - lat1),
        lon1 + fraction * (lon2 - lon1),
    )
}

fn wrap_longitude(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}
