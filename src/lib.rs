// Library exports for the round trip generator and its geometry helpers

pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod models;
pub mod services;
pub mod util;

// Re-export commonly used types
pub use config::RoundTripParams;
pub use error::{Result, RoutingError};
pub use models::{GeoPoint, Snap, WaypointSequence};
pub use services::{EdgeFilter, RoundTripGenerator, SpatialIndex};
