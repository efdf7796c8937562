//! Bearing and orientation math.
//!
//! Two angle conventions meet here: compass azimuths (degrees, 0 = north,
//! clockwise) and plane orientations (radians, 0 = east, counter-clockwise,
//! in `(-PI, PI]`).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::{Result, RoutingError};

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Convert a compass azimuth into a plane angle measured counter-clockwise from the x-axis.
/// Both 0 and 360 are accepted.
pub fn azimuth_to_plane_angle(azimuth: f64) -> Result<f64> {
    if !(0.0..=360.0).contains(&azimuth) {
        return Err(RoutingError::invalid(format!(
            "Azimuth {} must be in [0, 360]",
            azimuth
        )));
    }

    let mut angle = FRAC_PI_2 - azimuth.to_radians();
    if angle < -PI {
        angle += TAU;
    }
    if angle > PI {
        angle -= TAU;
    }
    Ok(angle)
}

/// Orientation of the direction from point 1 to point 2, in radians.
///
/// Longitude deltas are shrunk by the cosine of the mean latitude so the
/// angle matches what a local planar projection would show. Identical points
/// give 0.
pub fn orientation(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let shrink_factor = ((lat1 + lat2) / 2.0).to_radians().cos();
    let angle = (lat2 - lat1).atan2(shrink_factor * (lon2 - lon1));
    if angle.is_finite() {
        angle
    } else {
        0.0
    }
}

/// Compass bearing in degrees `[0, 360)` from point 1 to point 2.
pub fn azimuth(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let mut bearing = FRAC_PI_2 - orientation(lat1, lon1, lat2, lon2);
    if bearing < 0.0 {
        bearing += TAU;
    }
    round4(bearing).to_degrees() % 360.0
}

/// Shift `angle_to_align` by a full turn when needed so that its difference to
/// `base_angle` stays within PI. Keeps turn angles continuous across the
/// +-PI seam.
pub fn align_orientation(base_angle: f64, angle_to_align: f64) -> f64 {
    if base_angle >= 0.0 {
        if angle_to_align < -PI + base_angle {
            angle_to_align + TAU
        } else {
            angle_to_align
        }
    } else if angle_to_align > PI + base_angle {
        angle_to_align - TAU
    } else {
        angle_to_align
    }
}

/// Signed-area test on the triangle a-b-c. Collinear points are not clockwise.
pub fn is_clockwise(a_x: f64, a_y: f64, b_x: f64, b_y: f64, c_x: f64, c_y: f64) -> bool {
    let signed_area = (b_x - a_x) * (c_y - a_y) - (b_y - a_y) * (c_x - a_x);
    signed_area < 0.0
}

/// Name of the eight-way compass sector an azimuth falls into.
pub fn azimuth_to_compass_point(azimuth: f64) -> Result<&'static str> {
    if !(0.0..=360.0).contains(&azimuth) {
        return Err(RoutingError::invalid(format!(
            "Azimuth {} must be in [0, 360]",
            azimuth
        )));
    }
    let sector = ((azimuth + 22.5) / 45.0).floor() as usize % COMPASS_POINTS.len();
    Ok(COMPASS_POINTS[sector])
}

/// Normalize any finite bearing into `[0, 360)`.
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    let normalized = azimuth.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
