pub mod distance;
pub mod geo_point;
pub mod snap;
pub mod waypoints;

pub use distance::DistanceMeters;
pub use geo_point::GeoPoint;
pub use snap::{EdgeCandidate, EdgeId, NodeId, Snap, INVALID_NODE};
pub use waypoints::WaypointSequence;
