use tracing::{debug, instrument};

use crate::constants::DEFAULT_SEARCH_RADIUS_M;
use crate::geometry::distance::intermediate_point;
use crate::geometry::{DistanceCalc, EarthCalc};
use crate::models::{EdgeCandidate, EdgeId, GeoPoint, NodeId, Snap};

/// Predicate deciding which graph edges may be matched by a nearest-neighbor query.
pub trait EdgeFilter {
    fn accept(&self, edge: &EdgeCandidate) -> bool;
}

impl<F> EdgeFilter for F
where
    F: Fn(&EdgeCandidate) -> bool,
{
    fn accept(&self, edge: &EdgeCandidate) -> bool {
        self(edge)
    }
}

/// Accepts every edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllEdges;

impl EdgeFilter for AllEdges {
    fn accept(&self, _edge: &EdgeCandidate) -> bool {
        true
    }
}

/// Nearest-neighbor lookup over the road graph's geometry.
///
/// Implementations return an invalid [`Snap`] when nothing acceptable lies
/// within their search bound; they do not fail.
pub trait SpatialIndex {
    fn find_closest(&self, lat: f64, lon: f64, filter: &dyn EdgeFilter) -> Snap;
}

impl<T: SpatialIndex + ?Sized> SpatialIndex for &T {
    fn find_closest(&self, lat: f64, lon: f64, filter: &dyn EdgeFilter) -> Snap {
        (**self).find_closest(lat, lon, filter)
    }
}

#[derive(Debug, Clone)]
struct IndexedEdge {
    candidate: EdgeCandidate,
    base: GeoPoint,
    adj: GeoPoint,
}

/// Brute-force index over a list of straight edges.
///
/// Every query scans all edges, so this is meant for small graphs, fixtures
/// and the demo binary.
#[derive(Debug, Clone)]
pub struct LinearNodeIndex {
    edges: Vec<IndexedEdge>,
    search_radius_m: f64,
}

impl Default for LinearNodeIndex {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_RADIUS_M)
    }
}

impl LinearNodeIndex {
    pub fn new(search_radius_m: f64) -> Self {
        Self {
            edges: Vec::new(),
            search_radius_m,
        }
    }

    /// Adds an edge and returns its id.
    pub fn add_edge(
        &mut self,
        base_node: NodeId,
        base: GeoPoint,
        adj_node: NodeId,
        adj: GeoPoint,
    ) -> EdgeId {
        let edge = self.edges.len();
        self.edges.push(IndexedEdge {
            candidate: EdgeCandidate {
                edge,
                base_node,
                adj_node,
            },
            base,
            adj,
        });
        edge
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Rectangular street grid of `size x size` nodes centered on `center`,
    /// `spacing_m` apart. Node ids run row by row from the south-west corner.
    pub fn grid(center: GeoPoint, size: usize, spacing_m: f64, search_radius_m: f64) -> Self {
        let calc = EarthCalc;
        let half_span = spacing_m * (size.saturating_sub(1)) as f64 / 2.0;
        let south = calc.project_coordinate(center.lat, center.lon, half_span, 180.0);
        let south_west = calc.project_coordinate(south.lat, south.lon, half_span, 270.0);

        let mut nodes = Vec::with_capacity(size * size);
        for row in 0..size {
            let row_start = calc.project_coordinate(
                south_west.lat,
                south_west.lon,
                spacing_m * row as f64,
                0.0,
            );
            for col in 0..size {
                nodes.push(calc.project_coordinate(
                    row_start.lat,
                    row_start.lon,
                    spacing_m * col as f64,
                    90.0,
                ));
            }
        }

        let mut index = Self::new(search_radius_m);
        for row in 0..size {
            for col in 0..size {
                let id = row * size + col;
                if col + 1 < size {
                    index.add_edge(id, nodes[id], id + 1, nodes[id + 1]);
                }
                if row + 1 < size {
                    index.add_edge(id, nodes[id], id + size, nodes[id + size]);
                }
            }
        }
        debug!(
            nodes = size * size,
            edges = index.edge_count(),
            "Built grid index around {}",
            center
        );
        index
    }

    /// Closest point on a straight edge, measured in a local plane where
    /// longitude is shrunk by `cos(lat)`. Returns the fraction along the edge.
    fn project_onto_edge(query: &GeoPoint, edge: &IndexedEdge) -> f64 {
        let shrink = query.lat.to_radians().cos();
        let dx = (edge.adj.lon - edge.base.lon) * shrink;
        let dy = edge.adj.lat - edge.base.lat;
        let len_sq = dx * dx + dy * dy;
        if len_sq < 1e-20 {
            return 0.0;
        }
        let qx = (query.lon - edge.base.lon) * shrink;
        let qy = query.lat - edge.base.lat;
        ((qx * dx + qy * dy) / len_sq).clamp(0.0, 1.0)
    }
}

impl SpatialIndex for LinearNodeIndex {
    #[instrument(level = "trace", skip(self, filter))]
    fn find_closest(&self, lat: f64, lon: f64, filter: &dyn EdgeFilter) -> Snap {
        let query = GeoPoint::from_raw(lat, lon);
        let calc = EarthCalc;

        let mut best: Option<(f64, f64, &IndexedEdge, GeoPoint)> = None;
        for edge in &self.edges {
            if !filter.accept(&edge.candidate) {
                continue;
            }
            let fraction = Self::project_onto_edge(&query, edge);
            let snapped = intermediate_point(
                fraction,
                edge.base.lat,
                edge.base.lon,
                edge.adj.lat,
                edge.adj.lon,
            );
            let dist = calc.calc_dist_between(&query, &snapped);
            if dist > self.search_radius_m {
                continue;
            }
            if best.as_ref().map_or(true, |(d, ..)| dist < *d) {
                best = Some((dist, fraction, edge, snapped));
            }
        }

        match best {
            Some((dist, fraction, edge, snapped)) => {
                let node = if fraction <= 0.5 {
                    edge.candidate.base_node
                } else {
                    edge.candidate.adj_node
                };
                Snap::new(query, node, Some(edge.candidate.edge), snapped, dist)
            }
            None => Snap::invalid(query),
        }
    }
}
