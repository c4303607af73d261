use ahash::HashMap;

use super::edge::EdgeRecord;

/// Adjacency view over the edge list: city name to its outgoing arcs.
///
/// Neighbor lists keep the order in which edges were inserted, so repeated
/// searches over the same input expand candidates in the same order and
/// break cost ties identically.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    out_edges: HashMap<String, Vec<EdgeRecord>>,
}

impl Adjacency {
    pub fn new() -> Self {
        Adjacency {
            out_edges: HashMap::default(),
        }
    }

    /// Builds the view from a flat edge list. With `directed == false`
    /// every edge is also mirrored into a reversed copy, as route data
    /// usually describes connections rather than one-way arcs.
    pub fn from_edges(edges: &[EdgeRecord], directed: bool) -> Self {
        let mut adjacency = Adjacency::new();
        for edge in edges {
            adjacency.insert(edge.clone());
            if !directed {
                adjacency.insert(edge.reversed());
            }
        }
        adjacency
    }

    pub fn insert(&mut self, edge: EdgeRecord) {
        self.out_edges
            .entry(edge.source.clone())
            .or_default()
            .push(edge);
    }

    /// Outgoing arcs of `node`. A node the view has never seen simply has
    /// no outgoing arcs; that is not an error.
    pub fn neighbors(&self, node: &str) -> &[EdgeRecord] {
        self.out_edges
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn number_of_nodes(&self) -> usize {
        self.out_edges.len()
    }

    pub fn number_of_edges(&self) -> usize {
        self.out_edges.values().map(Vec::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.out_edges.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str) -> EdgeRecord {
        EdgeRecord {
            source: source.to_string(),
            target: target.to_string(),
            mode: "train".to_string(),
            distance_km: 1.0,
            time_min: 1.0,
            cost_usd: 1.0,
            emission_kgco2: 1.0,
            safety_score: 0.8,
            accessible: true,
        }
    }

    #[test]
    fn mirrors_undirected_edges() {
        let adjacency = Adjacency::from_edges(&[edge("a", "b")], false);
        assert_eq!(adjacency.neighbors("a").len(), 1);
        assert_eq!(adjacency.neighbors("b").len(), 1);
        assert_eq!(adjacency.neighbors("b")[0].target, "a");
    }

    #[test]
    fn directed_edges_are_not_mirrored() {
        let adjacency = Adjacency::from_edges(&[edge("a", "b")], true);
        assert_eq!(adjacency.neighbors("a").len(), 1);
        assert!(adjacency.neighbors("b").is_empty());
    }

    #[test]
    fn missing_node_has_no_neighbors() {
        let adjacency = Adjacency::from_edges(&[edge("a", "b")], false);
        assert!(adjacency.neighbors("nowhere").is_empty());
    }

    #[test]
    fn parallel_edges_stay_distinct() {
        let mut fast = edge("a", "b");
        fast.mode = "flight".to_string();
        let adjacency = Adjacency::from_edges(&[edge("a", "b"), fast], true);
        assert_eq!(adjacency.neighbors("a").len(), 2);
    }
}
