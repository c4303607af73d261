use crate::graphs::{Cost, NodeIndex};

/// Estimated remaining cost from one node to another.
///
/// The guided search treats the estimate as a lower bound on the true
/// remaining cost. Nothing verifies that: an overestimating heuristic (for
/// example a geographic estimate while minimizing monetary cost) still
/// terminates and still yields a route, but the route may not be optimal.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, from: &str, to: &str) -> Cost;
}

/// Estimates zero everywhere, reducing the guided search to the uninformed
/// one.
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: &str, _to: &str) -> Cost {
        0.0
    }
}

/// Straight-line distance in kilometers between two cities' coordinates.
///
/// Admissible for the distance metric; using it with any other metric is an
/// accuracy trade-off the caller opts into. Cities without coordinates
/// estimate 0, which is always admissible.
pub struct HaversineHeuristic<'a> {
    nodes: &'a NodeIndex,
}

impl<'a> HaversineHeuristic<'a> {
    pub fn new(nodes: &'a NodeIndex) -> Self {
        HaversineHeuristic { nodes }
    }
}

impl Heuristic for HaversineHeuristic<'_> {
    fn estimate(&self, from: &str, to: &str) -> Cost {
        let (Some(from), Some(to)) = (self.nodes.get(from), self.nodes.get(to)) else {
            return 0.0;
        };
        match (from.lat, from.lon, to.lat, to.lon) {
            (Some(lat1), Some(lon1), Some(lat2), Some(lon2)) => {
                haversine(lat1, lon1, lat2, lon2)
            }
            _ => 0.0,
        }
    }
}

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinates.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::NodeRecord;

    #[test]
    fn haversine_matches_known_distance() {
        // Berlin to Paris, roughly 877 km great-circle.
        let distance = haversine(52.52, 13.405, 48.8566, 2.3522);
        assert!((distance - 877.46).abs() < 1.0);
    }

    #[test]
    fn haversine_is_zero_for_identical_points() {
        assert_eq!(haversine(52.52, 13.405, 52.52, 13.405), 0.0);
    }

    #[test]
    fn missing_coordinates_estimate_zero() {
        let mut nodes = NodeIndex::new();
        nodes.insert(NodeRecord {
            city: "Atlantis".to_string(),
            country: None,
            lat: None,
            lon: None,
        });
        nodes.insert(NodeRecord {
            city: "Berlin".to_string(),
            country: None,
            lat: Some(52.52),
            lon: Some(13.405),
        });
        let heuristic = HaversineHeuristic::new(&nodes);
        assert_eq!(heuristic.estimate("Atlantis", "Berlin"), 0.0);
        assert_eq!(heuristic.estimate("Berlin", "Nowhere"), 0.0);
    }
}
