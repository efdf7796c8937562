use geojson::{Feature, Geometry, JsonObject, Value};
use serde::Serialize;

use crate::geometry::{DistanceCalc, EarthCalc};
use crate::models::{DistanceMeters, GeoPoint, NodeId, Snap};

/// Ordered snaps of a round trip. The first and last entries are the start.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WaypointSequence(Vec<Snap>);

impl WaypointSequence {
    pub(crate) fn new(snaps: Vec<Snap>) -> Self {
        WaypointSequence(snaps)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Snap> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Snap> {
        self.0.last()
    }

    pub fn get(&self, index: usize) -> Option<&Snap> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Snap> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Snap] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Snap> {
        self.0
    }

    /// Whether the sequence starts and ends on the same graph node.
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => self.len() >= 2 && first == last,
            _ => false,
        }
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.0.iter().map(Snap::closest_node).collect()
    }

    /// Snapped coordinates of every waypoint.
    pub fn points(&self) -> Vec<GeoPoint> {
        self.0.iter().filter_map(Snap::snapped_point).collect()
    }

    /// Great-circle length of the polygon through the snapped points. Road
    /// distance between the waypoints is always at least this long.
    pub fn straight_line_distance(&self) -> DistanceMeters {
        let calc = EarthCalc;
        self.points()
            .windows(2)
            .map(|leg| DistanceMeters(calc.calc_dist_between(&leg[0], &leg[1])))
            .sum()
    }

    /// LineString feature through the snapped points, with the matched node
    /// ids as a property. Handy for eyeballing a loop on a map.
    pub fn to_geojson_feature(&self) -> Feature {
        let coordinates = self
            .points()
            .iter()
            .map(|p| vec![p.lon, p.lat])
            .collect::<Vec<_>>();

        let mut properties = JsonObject::new();
        properties.insert("node_ids".to_string(), serde_json::json!(self.node_ids()));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(coordinates))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

impl<'a> IntoIterator for &'a WaypointSequence {
    type Item = &'a Snap;
    type IntoIter = std::slice::Iter<'a, Snap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
