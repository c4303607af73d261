use itertools::Itertools;

use super::{edge::EdgeRecord, Cost, NodeIndex};
use crate::heuristics::{HaversineHeuristic, Heuristic};

/// Magnitude derivation parameters for one transport mode.
#[derive(Clone, Copy, Debug)]
pub struct ModeProfile {
    pub mode: &'static str,
    pub speed_kmh: Cost,
    pub cost_per_km: Cost,
    pub emission_per_km: Cost,
    pub safety: f64,
}

/// The stock mode set synthetic route data is generated with.
pub const TRANSPORT_MODES: [ModeProfile; 5] = [
    ModeProfile {
        mode: "car",
        speed_kmh: 80.0,
        cost_per_km: 0.10,
        emission_per_km: 0.12,
        safety: 0.7,
    },
    ModeProfile {
        mode: "bus",
        speed_kmh: 60.0,
        cost_per_km: 0.05,
        emission_per_km: 0.08,
        safety: 0.75,
    },
    ModeProfile {
        mode: "train",
        speed_kmh: 120.0,
        cost_per_km: 0.08,
        emission_per_km: 0.04,
        safety: 0.85,
    },
    ModeProfile {
        mode: "flight",
        speed_kmh: 700.0,
        cost_per_km: 0.20,
        emission_per_km: 0.25,
        safety: 0.9,
    },
    ModeProfile {
        mode: "walk",
        speed_kmh: 5.0,
        cost_per_km: 0.0,
        emission_per_km: 0.0,
        safety: 0.6,
    },
];

/// One edge per mode for every unordered city pair. Cities are visited in
/// sorted order, so the output is reproducible across runs.
pub fn full_graph(nodes: &NodeIndex, modes: &[ModeProfile]) -> Vec<EdgeRecord> {
    let heuristic = HaversineHeuristic::new(nodes);
    let cities: Vec<&str> = nodes.cities().sorted().collect();

    let mut edges = Vec::new();
    for (index, &source) in cities.iter().enumerate() {
        for &target in &cities[index + 1..] {
            let distance = heuristic.estimate(source, target);
            for profile in modes {
                edges.push(make_edge(source, target, distance, profile));
            }
        }
    }
    edges
}

/// One edge per mode from every city to its `k` nearest neighbors by
/// straight-line distance.
pub fn k_nearest_graph(nodes: &NodeIndex, k: usize, modes: &[ModeProfile]) -> Vec<EdgeRecord> {
    let heuristic = HaversineHeuristic::new(nodes);
    let cities: Vec<&str> = nodes.cities().sorted().collect();

    let mut edges = Vec::new();
    for &source in &cities {
        let nearest = cities
            .iter()
            .copied()
            .filter(|&city| city != source)
            .map(|target| (target, heuristic.estimate(source, target)))
            .sorted_by(|a, b| a.1.total_cmp(&b.1))
            .take(k);
        for (target, distance) in nearest {
            for profile in modes {
                edges.push(make_edge(source, target, distance, profile));
            }
        }
    }
    edges
}

/// Derives all magnitudes of one edge from its distance and the mode's
/// profile, rounded the way the published CSVs are.
pub fn make_edge(
    source: &str,
    target: &str,
    distance_km: Cost,
    profile: &ModeProfile,
) -> EdgeRecord {
    EdgeRecord {
        source: source.to_string(),
        target: target.to_string(),
        mode: profile.mode.to_string(),
        distance_km: round_to(distance_km, 2),
        time_min: round_to(distance_km / profile.speed_kmh * 60.0, 1),
        cost_usd: round_to(distance_km * profile.cost_per_km, 2),
        emission_kgco2: round_to(distance_km * profile.emission_per_km, 2),
        safety_score: profile.safety,
        accessible: true,
    }
}

fn round_to(value: Cost, decimals: i32) -> Cost {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::NodeRecord;

    fn city(name: &str, lat: f64, lon: f64) -> NodeRecord {
        NodeRecord {
            city: name.to_string(),
            country: None,
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    fn three_cities() -> NodeIndex {
        let mut nodes = NodeIndex::new();
        nodes.insert(city("Berlin", 52.52, 13.405));
        nodes.insert(city("Hamburg", 53.55, 9.99));
        nodes.insert(city("Munich", 48.14, 11.58));
        nodes
    }

    #[test]
    fn full_graph_covers_every_pair_once_per_mode() {
        let nodes = three_cities();
        let edges = full_graph(&nodes, &TRANSPORT_MODES);
        // 3 unordered pairs, 5 modes each.
        assert_eq!(edges.len(), 15);
        let berlin_hamburg = edges
            .iter()
            .filter(|edge| edge.source == "Berlin" && edge.target == "Hamburg")
            .count();
        assert_eq!(berlin_hamburg, TRANSPORT_MODES.len());
    }

    #[test]
    fn k_nearest_keeps_only_the_closest_neighbors() {
        let nodes = three_cities();
        let edges = k_nearest_graph(&nodes, 1, &TRANSPORT_MODES);
        assert_eq!(edges.len(), 3 * TRANSPORT_MODES.len());
        // Hamburg's nearest city is Berlin, not Munich.
        assert!(edges
            .iter()
            .filter(|edge| edge.source == "Hamburg")
            .all(|edge| edge.target == "Berlin"));
    }

    #[test]
    fn magnitudes_derive_from_distance_and_profile() {
        let train = &TRANSPORT_MODES[2];
        let edge = make_edge("a", "b", 120.0, train);
        assert_eq!(edge.mode, "train");
        assert_eq!(edge.distance_km, 120.0);
        assert_eq!(edge.time_min, 60.0);
        assert_eq!(edge.cost_usd, 9.6);
        assert_eq!(edge.emission_kgco2, 4.8);
        assert_eq!(edge.safety_score, 0.85);
    }

    #[test]
    fn generation_is_reproducible() {
        let nodes = three_cities();
        assert_eq!(
            full_graph(&nodes, &TRANSPORT_MODES),
            full_graph(&nodes, &TRANSPORT_MODES)
        );
        assert_eq!(
            k_nearest_graph(&nodes, 2, &TRANSPORT_MODES),
            k_nearest_graph(&nodes, 2, &TRANSPORT_MODES)
        );
    }
}
