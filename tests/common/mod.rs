use roundtrip::models::{EdgeCandidate, GeoPoint, NodeId, Snap};
use roundtrip::services::{EdgeFilter, SpatialIndex};
use roundtrip::util::RandomSource;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Spatial index that answers from a queue of prepared snaps and records
/// every query it receives. Once the queue is empty every query misses.
#[allow(dead_code)]
pub struct ScriptedIndex {
    answers: Mutex<VecDeque<Option<NodeId>>>,
    queries: Mutex<Vec<GeoPoint>>,
}

#[allow(dead_code)]
impl ScriptedIndex {
    /// `Some(node)` snaps the query onto itself as `node`, `None` misses.
    pub fn new(answers: impl IntoIterator<Item = Option<NodeId>>) -> Self {
        ScriptedIndex {
            answers: Mutex::new(answers.into_iter().collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<GeoPoint> {
        self.queries.lock().unwrap().clone()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl SpatialIndex for ScriptedIndex {
    fn find_closest(&self, lat: f64, lon: f64, filter: &dyn EdgeFilter) -> Snap {
        let query = GeoPoint::from_raw(lat, lon);
        self.queries.lock().unwrap().push(query);

        match self.answers.lock().unwrap().pop_front().flatten() {
            Some(node) => {
                let edge = EdgeCandidate {
                    edge: node,
                    base_node: node,
                    adj_node: node,
                };
                if filter.accept(&edge) {
                    Snap::new(query, node, Some(node), query, 0.0)
                } else {
                    Snap::invalid(query)
                }
            }
            None => Snap::invalid(query),
        }
    }
}

/// Random source replaying fixed doubles; integers and booleans are derived
/// from them.
#[allow(dead_code)]
pub struct ScriptedRandom {
    doubles: Vec<f64>,
    position: usize,
}

#[allow(dead_code)]
impl ScriptedRandom {
    pub fn new(doubles: Vec<f64>) -> Self {
        ScriptedRandom {
            doubles,
            position: 0,
        }
    }

    fn next(&mut self) -> f64 {
        let value = self.doubles[self.position % self.doubles.len()];
        self.position += 1;
        value
    }
}

impl RandomSource for ScriptedRandom {
    fn next_int(&mut self, bound: usize) -> usize {
        ((self.next() * bound as f64) as usize).min(bound - 1)
    }

    fn next_double(&mut self) -> f64 {
        self.next()
    }

    fn next_bool(&mut self) -> bool {
        self.next() >= 0.5
    }
}

/// A start point in central Germany
#[allow(dead_code)]
pub fn start() -> GeoPoint {
    GeoPoint::new(50.0, 10.0).unwrap()
}
