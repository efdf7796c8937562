pub mod angle;
pub mod distance;

pub use distance::{DistanceCalc, EarthCalc, EuclideanCalc};
