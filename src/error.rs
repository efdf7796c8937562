use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    /// Malformed configuration or out-of-contract input. Raised before any
    /// spatial index query is made.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An array operation indexed past the data it was handed.
    #[error("Index {index} out of bounds for length {len}")]
    OutOfBounds { index: i64, len: usize },

    /// A point could not be snapped to a usable graph element.
    /// `point_index` 0 is the start, `k >= 1` the k-th generated waypoint.
    #[error("{message}")]
    PointNotFound { point_index: usize, message: String },
}

impl RoutingError {
    pub fn invalid(message: impl Into<String>) -> Self {
        RoutingError::InvalidArgument(message.into())
    }

    pub fn out_of_bounds(index: impl TryInto<i64>, len: usize) -> Self {
        RoutingError::OutOfBounds {
            index: index.try_into().unwrap_or(i64::MAX),
            len,
        }
    }

    /// Index of the waypoint that could not be placed, if this is a snapping failure.
    pub fn point_index(&self) -> Option<usize> {
        match self {
            RoutingError::PointNotFound { point_index, .. } => Some(*point_index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RoutingError>;
