use ahash::HashMap;
use serde::{Deserialize, Serialize};

pub mod adjacency;
pub mod edge;
pub mod generate;
pub mod loader;
pub mod normalize;
pub mod quality;

pub type Cost = f64;

/// A named location with optional coordinates.
///
/// Coordinates are only consumed by the straight-line heuristic; a node
/// without them still participates in every search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub city: String,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Lookup table from city name to its record.
#[derive(Clone, Debug, Default)]
pub struct NodeIndex {
    nodes: HashMap<String, NodeRecord>,
}

impl NodeIndex {
    pub fn new() -> Self {
        NodeIndex {
            nodes: HashMap::default(),
        }
    }

    pub fn insert(&mut self, node: NodeRecord) {
        self.nodes.insert(node.city.clone(), node);
    }

    pub fn get(&self, city: &str) -> Option<&NodeRecord> {
        self.nodes.get(city)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }
}
