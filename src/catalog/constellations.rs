use std::sync::Arc;

use log::debug;

use super::star::{angular_separation_deg, CelestialPoint};

/// only stars brighter than this take part in constellation lines
pub const CONSTELLATION_MAGNITUDE_LIMIT: f64 = 2.0;
/// stars further apart than this, in degrees, are never connected
pub const CONSTELLATION_MAX_SEPARATION_DEG: f64 = 30.0;

/// a line between two catalog stars. Both ends are shared with the catalog
#[derive(Debug, Clone)]
pub struct ConstellationEdge {
    pub a: Arc<CelestialPoint>,
    pub b: Arc<CelestialPoint>,
}

impl ConstellationEdge {
    pub fn separation_deg(&self) -> f64 {
        angular_separation_deg(&self.a, &self.b)
    }
}

/// connects every pair of bright named stars closer than `CONSTELLATION_MAX_SEPARATION_DEG`.
/// The pair scan runs over the bright named subset only, background points are filtered out
/// before it
pub fn build_constellation_graph(catalog: &[Arc<CelestialPoint>]) -> Vec<ConstellationEdge> {
    let candidates: Vec<&Arc<CelestialPoint>> = catalog
        .iter()
        .filter(|s| s.magnitude < CONSTELLATION_MAGNITUDE_LIMIT && !s.is_synthetic())
        .collect();

    let mut edges = vec![];
    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if angular_separation_deg(a, b) < CONSTELLATION_MAX_SEPARATION_DEG {
                edges.push(ConstellationEdge {
                    a: Arc::clone(a),
                    b: Arc::clone(b),
                });
            }
        }
    }
    debug!(
        "{} constellation candidates produced {} edges",
        candidates.len(),
        edges.len()
    );
    edges
}
