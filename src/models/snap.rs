use serde::Serialize;

use crate::models::GeoPoint;

pub type NodeId = usize;
pub type EdgeId = usize;

/// Sentinel node id carried by a snap that matched nothing.
pub const INVALID_NODE: NodeId = usize::MAX;

/// The graph element an `EdgeFilter` is asked about during a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeCandidate {
    pub edge: EdgeId,
    pub base_node: NodeId,
    pub adj_node: NodeId,
}

/// Result of matching a query point to the road graph.
///
/// A snap is valid exactly when `closest_node` is not [`INVALID_NODE`]; a valid
/// snap always carries the snapped point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snap {
    query_point: GeoPoint,
    closest_node: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    closest_edge: Option<EdgeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapped_point: Option<GeoPoint>,
    query_distance: f64,
}

impl Snap {
    pub fn new(
        query_point: GeoPoint,
        closest_node: NodeId,
        closest_edge: Option<EdgeId>,
        snapped_point: GeoPoint,
        query_distance: f64,
    ) -> Self {
        Snap {
            query_point,
            closest_node,
            closest_edge,
            snapped_point: Some(snapped_point),
            query_distance,
        }
    }

    /// A snap for a query that matched nothing.
    pub fn invalid(query_point: GeoPoint) -> Self {
        Snap {
            query_point,
            closest_node: INVALID_NODE,
            closest_edge: None,
            snapped_point: None,
            query_distance: f64::MAX,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.closest_node != INVALID_NODE
    }

    pub fn query_point(&self) -> GeoPoint {
        self.query_point
    }

    pub fn closest_node(&self) -> NodeId {
        self.closest_node
    }

    pub fn closest_edge(&self) -> Option<EdgeId> {
        self.closest_edge
    }

    pub fn snapped_point(&self) -> Option<GeoPoint> {
        self.snapped_point
    }

    /// Distance in meters from the query point to the snapped point.
    pub fn query_distance(&self) -> f64 {
        self.query_distance
    }
}
