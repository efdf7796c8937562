pub mod round_trip;
pub mod spatial_index;

pub use round_trip::{MultiPointTour, RoundTripGenerator};
pub use spatial_index::{AllEdges, EdgeFilter, LinearNodeIndex, SpatialIndex};
